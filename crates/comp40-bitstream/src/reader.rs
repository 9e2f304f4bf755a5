//! Codeword stream reader

use byteorder::{BigEndian, ReadBytesExt};
use comp40_core::{Comp40Error, Comp40Result, QuantizedBlock, CODEWORD_BYTES};
use std::io::{ErrorKind, Read};

use crate::codeword::unpack;

/// Upper bound on blocks reserved before any payload has been read
const MAX_RESERVED_BLOCKS: usize = 1 << 16;

/// Reads big-endian 32-bit codewords from a byte stream
pub struct CodewordReader<R: Read> {
    reader: R,
    words_read: usize,
}

impl<R: Read> CodewordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            words_read: 0,
        }
    }

    /// Read one raw codeword
    pub fn read_codeword(&mut self) -> Comp40Result<u32> {
        match self.reader.read_u32::<BigEndian>() {
            Ok(word) => {
                self.words_read += 1;
                Ok(word)
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                Err(Comp40Error::InvalidBitstream(format!(
                    "stream ended inside codeword {} (after {} bytes)",
                    self.words_read,
                    self.words_read * CODEWORD_BYTES
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read and unpack one block
    pub fn read_block(&mut self) -> Comp40Result<QuantizedBlock> {
        self.read_codeword().map(unpack)
    }

    /// Read exactly `count` blocks
    ///
    /// `count` usually comes from an untrusted header, so only a bounded
    /// amount is reserved up front.
    pub fn read_blocks(&mut self, count: usize) -> Comp40Result<Vec<QuantizedBlock>> {
        let mut blocks = Vec::with_capacity(count.min(MAX_RESERVED_BLOCKS));
        for _ in 0..count {
            blocks.push(self.read_block()?);
        }
        Ok(blocks)
    }

    /// Number of bytes left in the stream; consumes them
    pub fn remaining_bytes(&mut self) -> Comp40Result<usize> {
        let mut rest = Vec::new();
        self.reader.read_to_end(&mut rest)?;
        Ok(rest.len())
    }

    pub fn words_read(&self) -> usize {
        self.words_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_big_endian() {
        let data = vec![0xFF, 0x80, 0x00, 0x77, 0x01, 0x02, 0x03, 0x04];
        let mut reader = CodewordReader::new(Cursor::new(data));

        assert_eq!(reader.read_codeword().unwrap(), 0xFF80_0077);
        assert_eq!(reader.read_codeword().unwrap(), 0x0102_0304);
        assert_eq!(reader.words_read(), 2);
        assert_eq!(reader.remaining_bytes().unwrap(), 0);
    }

    #[test]
    fn test_short_stream_is_an_error() {
        let data = vec![0xFF, 0x80, 0x00, 0x77, 0x01, 0x02];
        let mut reader = CodewordReader::new(Cursor::new(data));

        assert!(reader.read_block().is_ok());
        assert!(matches!(
            reader.read_block(),
            Err(Comp40Error::InvalidBitstream(_))
        ));
    }

    #[test]
    fn test_read_blocks() {
        let data = vec![0xFF, 0x80, 0x00, 0x77, 0x00, 0x00, 0x00, 0x00, 0xAB];
        let mut reader = CodewordReader::new(Cursor::new(data));

        let blocks = reader.read_blocks(2).unwrap();
        assert_eq!(blocks[0].a, 511);
        assert_eq!(blocks[0].pb, 7);
        assert_eq!(blocks[1], QuantizedBlock::default());
        assert_eq!(reader.remaining_bytes().unwrap(), 1);
    }

    #[test]
    fn test_read_blocks_with_huge_count_fails_cleanly() {
        let mut reader = CodewordReader::new(Cursor::new(vec![0u8; 4]));
        assert!(matches!(
            reader.read_blocks(usize::MAX),
            Err(Comp40Error::InvalidBitstream(_))
        ));
    }
}
