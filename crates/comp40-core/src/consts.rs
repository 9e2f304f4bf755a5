//! Constants used throughout the COMP40 implementation

/// Side length of a block in pixels
pub const BLOCK_SIZE: usize = 2;

/// Denominator of every decompressed image
pub const OUTPUT_DENOMINATOR: u16 = 255;

/// Largest value of the 9-bit luma DC field
pub const A_MAX: u16 = 511;

/// Scale applied to the clamped AC terms before truncation
pub const BCD_SCALE: f32 = 50.0;

/// Magnitude limit applied to the AC terms before scaling
pub const BCD_LIMIT: f32 = 0.3;

/// Bit widths of the codeword fields
pub const A_WIDTH: u32 = 9;
pub const BCD_WIDTH: u32 = 5;
pub const CHROMA_WIDTH: u32 = 4;

/// Least significant bit of each codeword field
pub const A_LSB: u32 = 23;
pub const B_LSB: u32 = 18;
pub const C_LSB: u32 = 13;
pub const D_LSB: u32 = 8;
pub const PB_LSB: u32 = 4;
pub const PR_LSB: u32 = 0;

/// Number of entries in the chroma quantization table
pub const CHROMA_LEVELS: usize = 1 << CHROMA_WIDTH;
