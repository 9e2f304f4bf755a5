//! Bit-level packing and codeword streams for COMP40
//!
//! This crate provides generic bit field operations on 64-bit words, the
//! fixed 32-bit codeword layout of a 2x2 block, and big-endian codeword
//! readers and writers.

pub mod bitpack;
pub mod codeword;
pub mod reader;
pub mod writer;

pub use bitpack::{
    extract_signed, extract_unsigned, fits_signed, fits_unsigned, insert_signed, insert_unsigned,
};
pub use codeword::{pack, unpack};
pub use reader::CodewordReader;
pub use writer::CodewordWriter;
