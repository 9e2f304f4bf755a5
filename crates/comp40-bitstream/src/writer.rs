//! Codeword stream writer

use byteorder::{BigEndian, WriteBytesExt};
use comp40_core::{Comp40Result, QuantizedBlock};
use std::io::Write;

use crate::codeword::pack;

/// Writes 32-bit codewords as 4 bytes each, most significant byte first
pub struct CodewordWriter<W: Write> {
    writer: W,
    words_written: usize,
}

impl<W: Write> CodewordWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            words_written: 0,
        }
    }

    /// Write one raw codeword
    pub fn write_codeword(&mut self, word: u32) -> Comp40Result<()> {
        self.writer.write_u32::<BigEndian>(word)?;
        self.words_written += 1;
        Ok(())
    }

    /// Pack and write one block
    pub fn write_block(&mut self, block: &QuantizedBlock) -> Comp40Result<()> {
        self.write_codeword(pack(block))
    }

    pub fn write_blocks<'a, I>(&mut self, blocks: I) -> Comp40Result<()>
    where
        I: IntoIterator<Item = &'a QuantizedBlock>,
    {
        for block in blocks {
            self.write_block(block)?;
        }
        Ok(())
    }

    pub fn words_written(&self) -> usize {
        self.words_written
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> Comp40Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
