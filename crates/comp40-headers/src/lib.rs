//! COMP40 header parsing and generation
//!
//! A compressed stream starts with two text lines:
//!
//! ```text
//! COMP40 Compressed image format 2
//! <width> <height>
//! ```
//!
//! followed immediately by the codewords.

use comp40_core::*;
use std::io::{Read, Write};

/// Header of a compressed stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedHeader {
    /// Pixel dimensions of the (trimmed) image, always even
    pub dimensions: Dimensions,
}

impl CompressedHeader {
    /// Header for an image of even, non-zero dimensions
    pub fn new(dimensions: Dimensions) -> Comp40Result<Self> {
        validate(dimensions)?;
        Ok(Self { dimensions })
    }

    /// Number of codewords that follow the header
    pub fn block_count(&self) -> usize {
        self.dimensions.in_blocks().pixel_count()
    }

    /// Size in bytes of the codeword payload
    pub fn payload_len(&self) -> usize {
        self.block_count() * CODEWORD_BYTES
    }

    /// Write both header lines
    pub fn write<W: Write>(&self, writer: &mut W) -> Comp40Result<()> {
        writeln!(
            writer,
            "{}{} {}",
            COMP40_MAGIC, self.dimensions.width, self.dimensions.height
        )?;
        Ok(())
    }

    /// Parse the header, leaving the reader at the first codeword byte
    ///
    /// Bytes are consumed one at a time so nothing past the header is read.
    pub fn parse<R: Read>(reader: &mut R) -> Comp40Result<Self> {
        let mut magic = vec![0u8; COMP40_MAGIC.len()];
        reader.read_exact(&mut magic).map_err(|_| {
            Comp40Error::InvalidHeader("stream is shorter than the format line".to_string())
        })?;
        if magic != COMP40_MAGIC.as_bytes() {
            return Err(Comp40Error::InvalidHeader(format!(
                "expected {:?}, found {:?}",
                COMP40_MAGIC,
                String::from_utf8_lossy(&magic)
            )));
        }

        let mut fields = HeaderFields::new(reader);
        let width = fields.next_number("width")?;
        let height = fields.next_number("height")?;
        match fields.skip_blanks()? {
            Some(b'\n') => {}
            Some(other) => {
                return Err(Comp40Error::InvalidHeader(format!(
                    "expected newline after dimensions, found {:?}",
                    other as char
                )))
            }
            None => {
                return Err(Comp40Error::InvalidHeader(
                    "stream ends inside the dimensions line".to_string(),
                ))
            }
        }

        let dimensions = Dimensions::new(width, height);
        validate(dimensions)?;
        Ok(Self { dimensions })
    }
}

fn validate(dimensions: Dimensions) -> Comp40Result<()> {
    if dimensions.is_empty() {
        return Err(Comp40Error::InvalidDimensions {
            width: dimensions.width,
            height: dimensions.height,
        });
    }
    if !dimensions.is_even() {
        return Err(Comp40Error::InvalidHeader(format!(
            "dimensions {}x{} are not even",
            dimensions.width, dimensions.height
        )));
    }
    Ok(())
}

/// Byte-at-a-time tokenizer for the dimensions line
struct HeaderFields<'a, R: Read> {
    reader: &'a mut R,
    /// Byte that terminated the previous number
    pending: Option<u8>,
}

impl<'a, R: Read> HeaderFields<'a, R> {
    fn new(reader: &'a mut R) -> Self {
        Self {
            reader,
            pending: None,
        }
    }

    fn read_byte(&mut self) -> Comp40Result<Option<u8>> {
        let mut byte = [0u8; 1];
        if self.reader.read(&mut byte)? == 0 {
            return Ok(None);
        }
        Ok(Some(byte[0]))
    }

    /// First byte that is not a space, tab or carriage return
    fn skip_blanks(&mut self) -> Comp40Result<Option<u8>> {
        let mut byte = match self.pending.take() {
            Some(b) => Some(b),
            None => self.read_byte()?,
        };
        while matches!(byte, Some(b' ') | Some(b'\t') | Some(b'\r')) {
            byte = self.read_byte()?;
        }
        Ok(byte)
    }

    /// Skip blanks, then read a decimal number
    fn next_number(&mut self, name: &str) -> Comp40Result<u32> {
        let mut byte = self.skip_blanks()?;

        let mut value: u32 = 0;
        let mut digits = 0;
        while let Some(b @ b'0'..=b'9') = byte {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add((b - b'0') as u32))
                .ok_or_else(|| Comp40Error::InvalidHeader(format!("{} is too large", name)))?;
            digits += 1;
            byte = self.read_byte()?;
        }

        if digits == 0 {
            return Err(Comp40Error::InvalidHeader(format!("missing {}", name)));
        }
        self.pending = byte;
        Ok(value)
    }
}
