//! Color space transformations for COMP40
//!
//! This crate implements:
//! - RGB <-> Y/Pb/Pr component video conversion
//! - Chroma quantization to 4-bit table indices

pub mod chroma;
pub mod ypbpr;

pub use chroma::*;
pub use ypbpr::*;
