//! ppmdiff - measure how far a decompressed image drifted from its source
//!
//! Prints `E = <rms>` where the RMS is taken over [0,1]-normalised samples.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use comp40::{pnm, rms_difference, Raster};

/// Root-mean-square difference between two PNM images
#[derive(Parser, Debug)]
#[command(name = "ppmdiff")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First image, or `-` for stdin
    #[arg(value_name = "FIRST")]
    first: PathBuf,

    /// Second image, or `-` for stdin
    #[arg(value_name = "SECOND")]
    second: PathBuf,
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn load(path: &Path) -> Result<Raster> {
    let image = if is_stdin(path) {
        pnm::read_pnm(io::stdin().lock())
    } else {
        let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        pnm::read_pnm(BufReader::new(file))
    };
    image.with_context(|| format!("cannot read image {}", path.display()))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(e) => println!("E = {:.4}", e),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<f64> {
    if is_stdin(&args.first) && is_stdin(&args.second) {
        bail!("at most one image may come from stdin");
    }

    let first = load(&args.first)?;
    let second = load(&args.second)?;
    rms_difference(&first, &second).context("images are not comparable")
}
