//! Block transform operations for COMP40
//!
//! This crate implements the 2x2 Hadamard luma transform, chroma averaging,
//! quantization of the resulting coefficients, and the grid-level passes that
//! apply them to every block of an image.

pub mod blocks;
pub mod hadamard;
pub mod quantization;

pub use blocks::*;
pub use hadamard::*;
pub use quantization::*;
