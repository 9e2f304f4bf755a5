//! Image data structures

use crate::consts::BLOCK_SIZE;
use crate::{BlockPosition, Comp40Error, Comp40Result, Dimensions, Rgb};

/// Row-major two-dimensional array
///
/// Every pipeline stage produces one of these: pixels, component video
/// samples, or one record per 2x2 block.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    dimensions: Dimensions,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![T::default(); dimensions.pixel_count()],
        }
    }
}

impl<T> Grid<T> {
    /// Wrap an existing row-major buffer
    pub fn from_vec(dimensions: Dimensions, cells: Vec<T>) -> Comp40Result<Self> {
        let expected = dimensions.pixel_count();
        if cells.len() != expected {
            return Err(Comp40Error::BufferTooSmall {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { dimensions, cells })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.dimensions.width as usize && y < self.dimensions.height as usize,
            "({}, {}) is outside a {}x{} grid",
            x,
            y,
            self.dimensions.width,
            self.dimensions.height
        );
        y * self.dimensions.width as usize + x
    }

    pub fn at(&self, x: usize, y: usize) -> &T {
        &self.cells[self.index(x, y)]
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.cells.chunks_exact(self.dimensions.width.max(1) as usize)
    }

    /// Apply `f` to every cell, keeping the layout
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            dimensions: self.dimensions,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// The top-left `dimensions` region of this grid
    pub fn cropped(&self, dimensions: Dimensions) -> Comp40Result<Self> {
        if dimensions.width > self.dimensions.width || dimensions.height > self.dimensions.height
        {
            return Err(Comp40Error::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }
        let width = dimensions.width as usize;
        let cells = self
            .rows()
            .take(dimensions.height as usize)
            .flat_map(|row| row[..width].iter().cloned())
            .collect();
        Ok(Self { dimensions, cells })
    }
}

impl<T: Copy> Grid<T> {
    /// The four cells of block (`bx`, `by`) in [`BlockPosition::ALL`] order
    pub fn block(&self, bx: usize, by: usize) -> [T; 4] {
        BlockPosition::ALL.map(|pos| {
            let (dx, dy) = pos.offset();
            *self.at(bx * BLOCK_SIZE + dx, by * BLOCK_SIZE + dy)
        })
    }
}

/// An RGB image with a shared sample denominator
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    denominator: u16,
    pixels: Grid<Rgb>,
}

impl Raster {
    /// A black image
    pub fn new(dimensions: Dimensions, denominator: u16) -> Comp40Result<Self> {
        Self::from_grid(Grid::new(dimensions), denominator)
    }

    pub fn from_pixels(
        dimensions: Dimensions,
        denominator: u16,
        pixels: Vec<Rgb>,
    ) -> Comp40Result<Self> {
        Self::from_grid(Grid::from_vec(dimensions, pixels)?, denominator)
    }

    /// Wrap a pixel grid, checking every sample against `denominator`
    pub fn from_grid(pixels: Grid<Rgb>, denominator: u16) -> Comp40Result<Self> {
        if denominator == 0 {
            return Err(Comp40Error::InvalidParameter(
                "denominator must be positive".to_string(),
            ));
        }
        if let Some(p) = pixels.cells().iter().find(|p| p.max_sample() > denominator) {
            return Err(Comp40Error::InvalidParameter(format!(
                "sample {} exceeds denominator {}",
                p.max_sample(),
                denominator
            )));
        }
        Ok(Self {
            denominator,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.pixels.dimensions()
    }

    pub fn denominator(&self) -> u16 {
        self.denominator
    }

    pub fn pixels(&self) -> &Grid<Rgb> {
        &self.pixels
    }

    pub fn at(&self, x: usize, y: usize) -> Rgb {
        *self.pixels.at(x, y)
    }

    /// Samples as interleaved RGB bytes, rescaled to a denominator of 255
    pub fn to_rgb8(&self) -> Vec<u8> {
        let denom = self.denominator as u32;
        let scale = |s: u16| ((s as u32 * 255 + denom / 2) / denom) as u8;
        self.pixels
            .cells()
            .iter()
            .flat_map(|p| [scale(p.red), scale(p.green), scale(p.blue)])
            .collect()
    }
}

/// Root-mean-square difference of two images over [0,1]-normalised samples
///
/// Images whose width or height differ by at most one pixel are compared
/// over their common top-left region.
pub fn rms_difference(first: &Raster, second: &Raster) -> Comp40Result<f64> {
    let (a, b) = (first.dimensions(), second.dimensions());
    if a.width.abs_diff(b.width) > 1 || a.height.abs_diff(b.height) > 1 {
        return Err(Comp40Error::InvalidDimensions {
            width: b.width,
            height: b.height,
        });
    }

    let width = a.width.min(b.width) as usize;
    let height = a.height.min(b.height) as usize;
    if width == 0 || height == 0 {
        return Ok(0.0);
    }

    let (da, db) = (first.denominator() as f64, second.denominator() as f64);
    let mut sum = 0.0;
    for y in 0..height {
        for x in 0..width {
            let (p, q) = (first.at(x, y), second.at(x, y));
            for (s, t) in [(p.red, q.red), (p.green, q.green), (p.blue, q.blue)] {
                let diff = s as f64 / da - t as f64 / db;
                sum += diff * diff;
            }
        }
    }

    Ok((sum / (3 * width * height) as f64).sqrt())
}
