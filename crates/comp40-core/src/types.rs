//! Core types for COMP40

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consts::BLOCK_SIZE;

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when both sides divide into whole blocks
    pub fn is_even(&self) -> bool {
        self.width % 2 == 0 && self.height % 2 == 0
    }

    /// Drops the last column and/or row when the side is odd
    pub fn trimmed_to_even(&self) -> Self {
        Self::new(self.width & !1, self.height & !1)
    }

    /// Size of the block grid covering these (even) dimensions
    pub fn in_blocks(&self) -> Self {
        Self::new(
            self.width / BLOCK_SIZE as u32,
            self.height / BLOCK_SIZE as u32,
        )
    }

    /// Pixel dimensions of a block grid of this size
    pub fn from_blocks(blocks: Dimensions) -> Self {
        Self::new(
            blocks.width * BLOCK_SIZE as u32,
            blocks.height * BLOCK_SIZE as u32,
        )
    }
}

/// An RGB pixel
///
/// Samples are integers scaled by the denominator of the owning [`crate::Raster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl Rgb {
    pub fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    pub fn gray(value: u16) -> Self {
        Self::new(value, value, value)
    }

    pub fn max_sample(&self) -> u16 {
        self.red.max(self.green).max(self.blue)
    }
}

/// Component video sample: luma plus blue/red difference chroma
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YPbPr {
    pub y: f32,
    pub pb: f32,
    pub pr: f32,
}

impl YPbPr {
    pub fn new(y: f32, pb: f32, pr: f32) -> Self {
        Self { y, pb, pr }
    }
}

/// Position of a pixel inside a 2x2 block
///
/// [`BlockPosition::ALL`] is the row-major order in which a block is gathered
/// and scattered, and the order in which the Hadamard transform takes its
/// four samples. Both directions go through it, so they cannot disagree about
/// which pixel is which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockPosition {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl BlockPosition {
    /// P0, P1, P2, P3
    pub const ALL: [BlockPosition; 4] = [
        BlockPosition::TopLeft,
        BlockPosition::TopRight,
        BlockPosition::BottomLeft,
        BlockPosition::BottomRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Column and row offset from the block's top-left pixel
    pub fn offset(self) -> (usize, usize) {
        match self {
            BlockPosition::TopLeft => (0, 0),
            BlockPosition::TopRight => (1, 0),
            BlockPosition::BottomLeft => (0, 1),
            BlockPosition::BottomRight => (1, 1),
        }
    }
}

/// Real-valued transform output for one 2x2 block
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockCoefficients {
    /// Mean luma (DC term)
    pub a: f32,
    /// Luma difference terms (AC terms)
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub avg_pb: f32,
    pub avg_pr: f32,
}

/// Quantized fields of one block, exactly the contents of a codeword
///
/// `a` holds 9 unsigned bits, `b`/`c`/`d` hold 5 signed bits and `pb`/`pr`
/// hold 4-bit chroma table indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuantizedBlock {
    pub a: u16,
    pub b: i8,
    pub c: i8,
    pub d: i8,
    pub pb: u8,
    pub pr: u8,
}
