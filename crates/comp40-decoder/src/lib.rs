//! COMP40 decoder implementation

use comp40_bitstream::CodewordReader;
use comp40_color::{ypbpr_to_rgb, Arith40Chroma, ChromaQuantizer};
use comp40_core::consts::OUTPUT_DENOMINATOR;
use comp40_core::*;
use comp40_headers::CompressedHeader;
use comp40_transform::{dequantize_block, scatter_blocks};
use log::debug;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Decoder options
#[derive(Debug, Clone)]
pub struct DecoderOptions {
    /// Reconstruct blocks on the rayon thread pool
    pub parallel: bool,
    /// Reject bytes after the last codeword
    pub strict: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            strict: true,
        }
    }
}

impl DecoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// COMP40 decoder
pub struct Comp40Decoder<C = Arith40Chroma> {
    options: DecoderOptions,
    chroma: C,
    header: Option<CompressedHeader>,
}

impl Comp40Decoder {
    pub fn new() -> Self {
        Self::with_options(DecoderOptions::default())
    }

    pub fn with_options(options: DecoderOptions) -> Self {
        Self::with_chroma(options, Arith40Chroma)
    }
}

impl<C: ChromaQuantizer> Comp40Decoder<C> {
    /// Decoder using a custom chroma table
    pub fn with_chroma(options: DecoderOptions, chroma: C) -> Self {
        Self {
            options,
            chroma,
            header: None,
        }
    }

    /// Decode a compressed file from a path
    pub fn decode_file<P: AsRef<Path>>(&mut self, path: P) -> Comp40Result<Raster> {
        let file = File::open(path)?;
        self.decode(BufReader::new(file))
    }

    /// Decode from a reader
    ///
    /// The output image has denominator [`OUTPUT_DENOMINATOR`].
    pub fn decode<R: Read>(&mut self, mut reader: R) -> Comp40Result<Raster> {
        // Parse header
        let header = CompressedHeader::parse(&mut reader)?;
        self.header = Some(header);
        debug!(
            "decoding {}x{} image from {} codewords",
            header.dimensions.width,
            header.dimensions.height,
            header.block_count()
        );

        // Read exactly one codeword per block
        let mut codewords = CodewordReader::new(&mut reader);
        let blocks = codewords.read_blocks(header.block_count())?;
        if self.options.strict {
            let trailing = codewords.remaining_bytes()?;
            if trailing > 0 {
                return Err(Comp40Error::TrailingData(trailing));
            }
        }

        let pixels = self.decode_blocks(header.dimensions.in_blocks(), &blocks)?;
        Raster::from_grid(pixels, OUTPUT_DENOMINATOR)
    }

    /// Reconstruct pixels from a row-major grid of quantized blocks
    pub fn decode_blocks(
        &self,
        blocks_dims: Dimensions,
        blocks: &[QuantizedBlock],
    ) -> Comp40Result<Grid<Rgb>> {
        let parallel = self.options.parallel;

        // Step 1: dequantize codeword fields
        let dequantize = |b: &QuantizedBlock| dequantize_block(b, &self.chroma);
        let coefficients = if parallel {
            blocks.par_iter().map(dequantize).collect()
        } else {
            blocks.iter().map(dequantize).collect()
        };
        let coefficients = Grid::from_vec(blocks_dims, coefficients)?;

        // Step 2: inverse Hadamard, chroma broadcast to each pixel
        let component = scatter_blocks(&coefficients, parallel);

        // Step 3: component video to RGB
        if parallel {
            let cells = component
                .cells()
                .par_iter()
                .map(|s| ypbpr_to_rgb(*s))
                .collect();
            Grid::from_vec(component.dimensions(), cells)
        } else {
            Ok(component.map(|s| ypbpr_to_rgb(*s)))
        }
    }

    /// Header of the most recently decoded stream
    pub fn header(&self) -> Option<&CompressedHeader> {
        self.header.as_ref()
    }
}

impl Default for Comp40Decoder {
    fn default() -> Self {
        Self::new()
    }
}
