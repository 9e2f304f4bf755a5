//! 40image - compress a PNM image to COMP40, or decompress it back to PPM
//!
//! Input comes from the named file or stdin; output always goes to stdout.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use log::debug;

use comp40::Mode;

/// Fixed-ratio lossy image codec
#[derive(Parser, Debug)]
#[command(name = "40image")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").args(["compress", "decompress"])))]
#[command(after_help = "\
EXAMPLES:
    40image photo.ppm > photo.c40          Compress a PPM file
    40image -d photo.c40 > restored.ppm    Decompress to binary PPM
    cat photo.ppm | 40image -c | 40image -d > restored.ppm")]
struct Args {
    /// Compress a PNM image (default)
    #[arg(short, long)]
    compress: bool,

    /// Decompress a COMP40 stream to binary PPM
    #[arg(short, long)]
    decompress: bool,

    /// Input file (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Process blocks on a single thread
    #[arg(long)]
    sequential: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn mode(&self) -> Mode {
        if self.decompress {
            Mode::Decompress
        } else {
            Mode::Compress
        }
    }
}

fn main() {
    let args = Args::parse();

    // RUST_LOG picks the filter unless -v forces debug output
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let input: Box<dyn Read> = match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mode = args.mode();
    debug!("{:?} from {:?}", mode, args.input);

    // Buffer the result so a failure leaves stdout untouched
    let mut output = Vec::new();
    mode.run(input, &mut output, !args.sequential)
        .with_context(|| match mode {
            Mode::Compress => "compression failed",
            Mode::Decompress => "decompression failed",
        })?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    writer.write_all(&output)?;
    writer.flush()?;
    Ok(())
}
