//! Error types for COMP40 operations

use thiserror::Error;

/// Result type for COMP40 operations
pub type Comp40Result<T> = Result<T, Comp40Error>;

/// Errors that can occur during compression/decompression
///
/// Only input-dependent failures are represented here. Violated bit-layer
/// preconditions (an over-wide field, a value that does not fit its
/// codeword slot) are caller bugs and panic instead.
#[derive(Error, Debug)]
pub enum Comp40Error {
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid bitstream: {0}")]
    InvalidBitstream(String),

    #[error("Unexpected {0} trailing byte(s) after the last codeword")]
    TrailingData(usize),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image container error: {0}")]
    Image(String),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Buffer too small: expected {expected}, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },
}
