//! RGB <-> Y/Pb/Pr (component video) conversion

use comp40_core::consts::OUTPUT_DENOMINATOR;
use comp40_core::{Rgb, YPbPr};

/// Forward matrix, rows Y, Pb, Pr
const RGB_TO_YPBPR: [[f32; 3]; 3] = [
    [0.299, 0.587, 0.114],
    [-0.168736, -0.331264, 0.5],
    [0.5, -0.418688, -0.081312],
];

/// Inverse matrix, rows R, G, B; columns Y, Pb, Pr
const YPBPR_TO_RGB: [[f32; 3]; 3] = [
    [1.0, 0.0, 1.402],
    [1.0, -0.344136, -0.714136],
    [1.0, 1.772, 0.0],
];

#[inline]
fn apply(matrix: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    matrix.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

/// Convert one pixel scaled by `denominator` to component video
pub fn rgb_to_ypbpr(pixel: Rgb, denominator: u16) -> YPbPr {
    let denom = denominator as f32;
    let normalized = [
        pixel.red as f32 / denom,
        pixel.green as f32 / denom,
        pixel.blue as f32 / denom,
    ];
    let [y, pb, pr] = apply(&RGB_TO_YPBPR, normalized);
    YPbPr::new(y, pb, pr)
}

/// Convert component video to RGB over [`OUTPUT_DENOMINATOR`]
///
/// Channels outside [0, 1] saturate; the scaled value is truncated.
pub fn ypbpr_to_rgb(sample: YPbPr) -> Rgb {
    let [r, g, b] = apply(&YPBPR_TO_RGB, [sample.y, sample.pb, sample.pr]);
    Rgb::new(to_sample(r), to_sample(g), to_sample(b))
}

#[inline]
fn to_sample(channel: f32) -> u16 {
    // NaN also lands on 0
    (channel.clamp(0.0, 1.0) * OUTPUT_DENOMINATOR as f32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{} vs {}", a, b);
    }

    #[test]
    fn test_primaries() {
        let white = rgb_to_ypbpr(Rgb::gray(255), 255);
        assert_close(white.y, 1.0);
        assert_close(white.pb, 0.0);
        assert_close(white.pr, 0.0);

        let red = rgb_to_ypbpr(Rgb::new(255, 0, 0), 255);
        assert_close(red.y, 0.299);
        assert_close(red.pb, -0.168736);
        assert_close(red.pr, 0.5);

        let blue = rgb_to_ypbpr(Rgb::new(0, 0, 1), 1);
        assert_close(blue.y, 0.114);
        assert_close(blue.pb, 0.5);
        assert_close(blue.pr, -0.081312);
    }

    #[test]
    fn test_denominator_normalizes() {
        let a = rgb_to_ypbpr(Rgb::new(10, 20, 30), 100);
        let b = rgb_to_ypbpr(Rgb::new(1, 2, 3), 10);
        assert_close(a.y, b.y);
        assert_close(a.pb, b.pb);
        assert_close(a.pr, b.pr);
    }

    #[test]
    fn test_inverse_saturates() {
        assert_eq!(ypbpr_to_rgb(YPbPr::new(2.0, 0.0, 0.0)), Rgb::gray(255));
        assert_eq!(ypbpr_to_rgb(YPbPr::new(-1.0, 0.0, 0.0)), Rgb::gray(0));
        let red = ypbpr_to_rgb(YPbPr::new(0.5, 0.0, 0.5));
        assert_eq!(red.red, 255);
        assert_eq!(red.blue, 127);
    }

    #[test]
    fn test_roundtrip_within_one_step() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (12, 200, 77), (255, 0, 128)] {
            let back = ypbpr_to_rgb(rgb_to_ypbpr(Rgb::new(r, g, b), 255));
            for (orig, out) in [(r, back.red), (g, back.green), (b, back.blue)] {
                assert!(orig.abs_diff(out) <= 1, "{} -> {}", orig, out);
            }
        }
    }
}
