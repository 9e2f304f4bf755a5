//! Core types and utilities for the COMP40 codec
//!
//! This crate provides the data structures shared by every stage of the
//! pipeline: pixel and coefficient records, the generic [`Grid`] container,
//! the [`Raster`] image with its sample denominator, and the error type.

pub mod consts;
pub mod error;
pub mod image;
pub mod types;

pub use error::{Comp40Error, Comp40Result};
pub use image::*;
pub use types::*;

/// First line of every compressed stream, including its newline
pub const COMP40_MAGIC: &str = "COMP40 Compressed image format 2\n";

/// Number of bytes each 2x2 block occupies in a compressed stream
pub const CODEWORD_BYTES: usize = 4;
