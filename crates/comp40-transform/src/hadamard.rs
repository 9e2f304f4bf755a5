//! 2x2 Hadamard luma transform
//!
//! Samples are indexed by [`comp40_core::BlockPosition`]: top-left,
//! top-right, bottom-left, bottom-right. Coefficients are
//!
//! - `a`: block mean (DC)
//! - `b`: bottom row minus top row
//! - `c`: right column minus left column
//! - `d`: main diagonal minus anti-diagonal
//!
//! each divided by four. Gathering the block column by column (top-left,
//! bottom-left, top-right, bottom-right) gives the familiar
//! `b = (-P0 + P1 - P2 + P3) / 4` form used by the COMP40 reference coder.

/// Luma samples to coefficients [a, b, c, d]
///
/// `b`, `c` and `d` vanish on a flat block.
pub fn hadamard_forward(luma: [f32; 4]) -> [f32; 4] {
    let [tl, tr, bl, br] = luma;
    [
        (tl + tr + bl + br) / 4.0,
        (-tl - tr + bl + br) / 4.0,
        (-tl + tr - bl + br) / 4.0,
        (tl - tr - bl + br) / 4.0,
    ]
}

/// Coefficients [a, b, c, d] back to luma samples
pub fn hadamard_inverse(coefficients: [f32; 4]) -> [f32; 4] {
    let [a, b, c, d] = coefficients;
    [
        a - b - c + d, // top-left
        a - b + c - d, // top-right
        a + b - c - d, // bottom-left
        a + b + c + d, // bottom-right
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_all_close(actual: [f32; 4], expected: [f32; 4]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-6, "{:?} vs {:?}", actual, expected);
        }
    }

    #[test]
    fn test_flat_block_has_no_ac() {
        assert_eq!(hadamard_forward([0.5; 4]), [0.5, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_basis_directions() {
        // bottom row brighter
        assert_all_close(hadamard_forward([0.0, 0.0, 1.0, 1.0]), [0.5, 0.5, 0.0, 0.0]);
        // right column brighter
        assert_all_close(hadamard_forward([0.0, 1.0, 0.0, 1.0]), [0.5, 0.0, 0.5, 0.0]);
        // main diagonal brighter
        assert_all_close(hadamard_forward([1.0, 0.0, 0.0, 1.0]), [0.5, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_inverse_undoes_forward() {
        let samples = [
            [0.1, 0.9, 0.4, 0.6],
            [1.0, 0.0, 0.0, 1.0],
            [0.25, 0.5, 0.75, 1.0],
            [0.0, 1.0, 0.0, 0.0],
        ];
        for luma in samples {
            assert_all_close(hadamard_inverse(hadamard_forward(luma)), luma);
        }
    }

    #[test]
    fn test_column_major_gather_matches_reference_form() {
        let (tl, tr, bl, br) = (0.1f32, 0.7, 0.3, 0.9);
        let [p0, p1, p2, p3] = [tl, bl, tr, br];
        let [a, b, c, d] = hadamard_forward([tl, tr, bl, br]);
        assert!((a - (p0 + p1 + p2 + p3) / 4.0).abs() < 1e-6);
        assert!((b - (-p0 + p1 - p2 + p3) / 4.0).abs() < 1e-6);
        assert!((c - (-p0 - p1 + p2 + p3) / 4.0).abs() < 1e-6);
        assert!((d - (p0 - p1 - p2 + p3) / 4.0).abs() < 1e-6);
    }
}
