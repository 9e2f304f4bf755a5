//! Quantization of block coefficients to codeword fields

use comp40_color::ChromaQuantizer;
use comp40_core::consts::{A_MAX, BCD_LIMIT, BCD_SCALE};
use comp40_core::{BlockCoefficients, QuantizedBlock};

/// Mean luma in [0, 1] to a 9-bit value, rounded and saturated
pub fn quantize_luma_dc(a: f32) -> u16 {
    (a * A_MAX as f32).round().clamp(0.0, A_MAX as f32) as u16
}

pub fn dequantize_luma_dc(a: u16) -> f32 {
    a as f32 / A_MAX as f32
}

/// A luma difference term to a 5-bit signed value in [-15, 15]
///
/// The term is clamped to +/-0.3 and scaled by 50; the fraction is
/// truncated toward zero.
pub fn quantize_luma_ac(term: f32) -> i8 {
    (term.clamp(-BCD_LIMIT, BCD_LIMIT) * BCD_SCALE) as i8
}

pub fn dequantize_luma_ac(term: i8) -> f32 {
    term as f32 / BCD_SCALE
}

/// Quantize every field of a block
pub fn quantize_block<C: ChromaQuantizer + ?Sized>(
    coefficients: &BlockCoefficients,
    chroma: &C,
) -> QuantizedBlock {
    QuantizedBlock {
        a: quantize_luma_dc(coefficients.a),
        b: quantize_luma_ac(coefficients.b),
        c: quantize_luma_ac(coefficients.c),
        d: quantize_luma_ac(coefficients.d),
        pb: chroma.quantize_chroma(coefficients.avg_pb),
        pr: chroma.quantize_chroma(coefficients.avg_pr),
    }
}

/// Restore representative coefficient values from quantized fields
pub fn dequantize_block<C: ChromaQuantizer + ?Sized>(
    block: &QuantizedBlock,
    chroma: &C,
) -> BlockCoefficients {
    BlockCoefficients {
        a: dequantize_luma_dc(block.a),
        b: dequantize_luma_ac(block.b),
        c: dequantize_luma_ac(block.c),
        d: dequantize_luma_ac(block.d),
        avg_pb: chroma.dequantize_chroma(block.pb),
        avg_pr: chroma.dequantize_chroma(block.pr),
    }
}
