//! Chroma quantization
//!
//! Averaged Pb/Pr values are stored as 4-bit indices into a table of
//! representative chroma levels.

use comp40_core::consts::CHROMA_LEVELS;

/// A paired chroma quantizer and dequantizer
pub trait ChromaQuantizer: Sync {
    /// 4-bit index for a chroma value; out-of-range input saturates
    fn quantize_chroma(&self, chroma: f32) -> u8;

    /// Representative chroma value of an index
    fn dequantize_chroma(&self, index: u8) -> f32;
}

/// Monotonic table of 16 chroma levels, denser near zero
pub const ARITH40_CHROMA_TABLE: [f32; CHROMA_LEVELS] = [
    -0.35, -0.20, -0.15, -0.10, -0.077, -0.055, -0.033, -0.011, 0.011, 0.033, 0.055, 0.077, 0.10,
    0.15, 0.20, 0.35,
];

/// The standard COMP40 chroma table; nearest level wins, ties go low
#[derive(Debug, Clone, Copy, Default)]
pub struct Arith40Chroma;

impl ChromaQuantizer for Arith40Chroma {
    fn quantize_chroma(&self, chroma: f32) -> u8 {
        let chroma = if chroma.is_nan() {
            0.0
        } else {
            chroma.clamp(-0.5, 0.5)
        };
        let mut best = 0;
        let mut best_distance = f32::INFINITY;
        for (index, level) in ARITH40_CHROMA_TABLE.iter().enumerate() {
            let distance = (chroma - level).abs();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        best as u8
    }

    fn dequantize_chroma(&self, index: u8) -> f32 {
        ARITH40_CHROMA_TABLE[index as usize & (CHROMA_LEVELS - 1)]
    }
}
