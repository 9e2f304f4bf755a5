//! # COMP40 - fixed-ratio lossy image codec
//!
//! Every 2x2 block of pixels is stored in one 32-bit codeword: a 9-bit mean
//! luma, three 5-bit luma differences and two 4-bit chroma indices.
//!
//! ## Quick Start
//!
//! ### Compressing
//!
//! ```no_run
//! use comp40::{Comp40Encoder, Dimensions, EncoderOptions, Raster, Rgb};
//!
//! let dims = Dimensions::new(640, 480);
//! let image = Raster::from_pixels(dims, 255, vec![Rgb::gray(128); dims.pixel_count()]).unwrap();
//!
//! let encoder = Comp40Encoder::new(EncoderOptions::default());
//! encoder.encode_file(&image, "output.c40").unwrap();
//! ```
//!
//! ### Decompressing
//!
//! ```no_run
//! use comp40::Comp40Decoder;
//!
//! let mut decoder = Comp40Decoder::new();
//! let image = decoder.decode_file("input.c40").unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```
//!
//! ### PPM to stream and back
//!
//! ```no_run
//! use comp40::{compress, decompress, DecoderOptions, EncoderOptions};
//! use std::fs::File;
//!
//! let mut stream = Vec::new();
//! compress(File::open("photo.ppm").unwrap(), &mut stream, &EncoderOptions::default()).unwrap();
//! decompress(&stream[..], std::io::stdout(), &DecoderOptions::default()).unwrap();
//! ```

pub mod pnm;

// Re-export core types
pub use comp40_core::{
    consts, rms_difference, BlockCoefficients, BlockPosition, Comp40Error, Comp40Result,
    Dimensions, Grid, QuantizedBlock, Raster, Rgb, YPbPr, COMP40_MAGIC,
};

pub use comp40_color::{Arith40Chroma, ChromaQuantizer};
pub use comp40_decoder::{Comp40Decoder, DecoderOptions};
pub use comp40_encoder::{Comp40Encoder, EncoderOptions};
pub use comp40_headers::CompressedHeader;

use log::debug;
use std::io::{Read, Write};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Direction of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// PNM image in, compressed stream out
    #[default]
    Compress,
    /// Compressed stream in, binary PPM out
    Decompress,
}

impl Mode {
    /// Run the conversion from `input` to `output`
    pub fn run<R: Read, W: Write>(self, input: R, output: W, parallel: bool) -> Comp40Result<()> {
        match self {
            Mode::Compress => {
                compress(input, output, &EncoderOptions::new().parallel(parallel)).map(|_| ())
            }
            Mode::Decompress => {
                decompress(input, output, &DecoderOptions::new().parallel(parallel)).map(|_| ())
            }
        }
    }
}

/// Read a PNM image and write its compressed stream
pub fn compress<R: Read, W: Write>(
    input: R,
    output: W,
    options: &EncoderOptions,
) -> Comp40Result<CompressedHeader> {
    let image = pnm::read_pnm(input)?;
    let header = Comp40Encoder::new(options.clone()).encode(&image, output)?;
    debug!(
        "compressed to {} bytes of codewords",
        header.payload_len()
    );
    Ok(header)
}

/// Read a compressed stream and write the image as binary PPM
///
/// Nothing is written unless the whole stream decodes.
pub fn decompress<R: Read, W: Write>(
    input: R,
    output: W,
    options: &DecoderOptions,
) -> Comp40Result<Dimensions> {
    let image = Comp40Decoder::with_options(options.clone()).decode(input)?;
    pnm::write_ppm(&image, output)?;
    Ok(image.dimensions())
}
