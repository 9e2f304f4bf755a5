//! Mapping between quantized block records and 32-bit codewords
//!
//! Layout, bit 0 least significant:
//!
//! | bits  | field | encoding |
//! |-------|-------|----------|
//! | 0-3   | pr    | unsigned |
//! | 4-7   | pb    | unsigned |
//! | 8-12  | d     | signed   |
//! | 13-17 | c     | signed   |
//! | 18-22 | b     | signed   |
//! | 23-31 | a     | unsigned |

use crate::bitpack::{
    extract_signed, extract_unsigned, fits_signed, fits_unsigned, insert_signed, insert_unsigned,
};
use comp40_core::consts::{
    A_LSB, A_WIDTH, BCD_WIDTH, B_LSB, CHROMA_WIDTH, C_LSB, D_LSB, PB_LSB, PR_LSB,
};
use comp40_core::QuantizedBlock;

/// Pack a quantized block into its codeword
///
/// Panics if a field is out of range for its slot; quantization never
/// produces such a value.
pub fn pack(block: &QuantizedBlock) -> u32 {
    let mut word = 0u64;
    word = put_unsigned(word, CHROMA_WIDTH, PR_LSB, block.pr as u64, "pr");
    word = put_unsigned(word, CHROMA_WIDTH, PB_LSB, block.pb as u64, "pb");
    word = put_signed(word, BCD_WIDTH, D_LSB, block.d as i64, "d");
    word = put_signed(word, BCD_WIDTH, C_LSB, block.c as i64, "c");
    word = put_signed(word, BCD_WIDTH, B_LSB, block.b as i64, "b");
    word = put_unsigned(word, A_WIDTH, A_LSB, block.a as u64, "a");
    word as u32
}

/// Recover the quantized fields of a codeword
pub fn unpack(codeword: u32) -> QuantizedBlock {
    let word = codeword as u64;
    QuantizedBlock {
        a: extract_unsigned(word, A_WIDTH, A_LSB) as u16,
        b: extract_signed(word, BCD_WIDTH, B_LSB) as i8,
        c: extract_signed(word, BCD_WIDTH, C_LSB) as i8,
        d: extract_signed(word, BCD_WIDTH, D_LSB) as i8,
        pb: extract_unsigned(word, CHROMA_WIDTH, PB_LSB) as u8,
        pr: extract_unsigned(word, CHROMA_WIDTH, PR_LSB) as u8,
    }
}

fn put_unsigned(word: u64, width: u32, lsb: u32, value: u64, field: &str) -> u64 {
    assert!(
        fits_unsigned(value, width),
        "{} = {} does not fit in {} unsigned bits",
        field,
        value,
        width
    );
    insert_unsigned(word, width, lsb, value)
}

fn put_signed(word: u64, width: u32, lsb: u32, value: i64, field: &str) -> u64 {
    assert!(
        fits_signed(value, width),
        "{} = {} does not fit in {} signed bits",
        field,
        value,
        width
    );
    insert_signed(word, width, lsb, value)
}
