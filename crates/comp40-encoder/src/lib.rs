//! COMP40 encoder implementation

use comp40_bitstream::CodewordWriter;
use comp40_color::{rgb_to_ypbpr, Arith40Chroma, ChromaQuantizer};
use comp40_core::*;
use comp40_headers::CompressedHeader;
use comp40_transform::{aggregate_blocks, quantize_block};
use log::debug;
use rayon::prelude::*;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encoder options
#[derive(Debug, Clone)]
pub struct EncoderOptions {
    /// Transform blocks on the rayon thread pool
    pub parallel: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// COMP40 encoder
pub struct Comp40Encoder<C = Arith40Chroma> {
    options: EncoderOptions,
    chroma: C,
}

impl Comp40Encoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self::with_chroma(options, Arith40Chroma)
    }
}

impl<C: ChromaQuantizer> Comp40Encoder<C> {
    /// Encoder using a custom chroma table
    pub fn with_chroma(options: EncoderOptions, chroma: C) -> Self {
        Self { options, chroma }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Compress an image to a file
    pub fn encode_file<P: AsRef<Path>>(
        &self,
        image: &Raster,
        path: P,
    ) -> Comp40Result<CompressedHeader> {
        let file = File::create(path)?;
        self.encode(image, BufWriter::new(file))
    }

    /// Compress an image into a new buffer
    pub fn encode_to_vec(&self, image: &Raster) -> Comp40Result<Vec<u8>> {
        let mut output = Vec::new();
        self.encode(image, &mut output)?;
        Ok(output)
    }

    /// Compress an image to a writer
    ///
    /// Odd trailing rows and columns are dropped first. The stream is
    /// assembled in memory, so nothing is written if any stage fails.
    pub fn encode<W: Write>(
        &self,
        image: &Raster,
        mut writer: W,
    ) -> Comp40Result<CompressedHeader> {
        let original = image.dimensions();
        let trimmed = original.trimmed_to_even();
        if trimmed.is_empty() {
            return Err(Comp40Error::InvalidDimensions {
                width: original.width,
                height: original.height,
            });
        }

        let pixels = if trimmed == original {
            Cow::Borrowed(image.pixels())
        } else {
            debug!(
                "trimming {}x{} to {}x{}",
                original.width, original.height, trimmed.width, trimmed.height
            );
            Cow::Owned(image.pixels().cropped(trimmed)?)
        };

        let header = CompressedHeader::new(trimmed)?;
        let blocks = self.encode_blocks(&pixels, image.denominator())?;
        debug!(
            "encoded {} blocks from a {}x{} image (denominator {})",
            blocks.len(),
            trimmed.width,
            trimmed.height,
            image.denominator()
        );

        let mut stream = Vec::with_capacity(COMP40_MAGIC.len() + 24 + header.payload_len());
        header.write(&mut stream)?;
        let mut codewords = CodewordWriter::new(&mut stream);
        codewords.write_blocks(&blocks)?;

        writer.write_all(&stream)?;
        writer.flush()?;
        Ok(header)
    }

    /// Quantized blocks of an even-sized pixel grid, row-major
    pub fn encode_blocks(
        &self,
        pixels: &Grid<Rgb>,
        denominator: u16,
    ) -> Comp40Result<Vec<QuantizedBlock>> {
        // Step 1: RGB to component video
        let component = self.to_component_video(pixels, denominator)?;

        // Step 2: 2x2 Hadamard transform and chroma averaging
        let coefficients = aggregate_blocks(&component, self.options.parallel)?;

        // Step 3: quantize to codeword fields
        let quantize = |c: &BlockCoefficients| quantize_block(c, &self.chroma);
        let blocks = if self.options.parallel {
            coefficients.cells().par_iter().map(quantize).collect()
        } else {
            coefficients.cells().iter().map(quantize).collect()
        };
        Ok(blocks)
    }

    fn to_component_video(
        &self,
        pixels: &Grid<Rgb>,
        denominator: u16,
    ) -> Comp40Result<Grid<YPbPr>> {
        let convert = |p: &Rgb| rgb_to_ypbpr(*p, denominator);
        if self.options.parallel {
            let cells = pixels.cells().par_iter().map(convert).collect();
            Grid::from_vec(pixels.dimensions(), cells)
        } else {
            Ok(pixels.map(convert))
        }
    }
}

impl Default for Comp40Encoder {
    fn default() -> Self {
        Self::new(EncoderOptions::default())
    }
}
