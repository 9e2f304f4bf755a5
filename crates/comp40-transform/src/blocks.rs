//! Block-level encoding over whole component video grids
//!
//! Every 2x2 block is transformed independently of its neighbours, so the
//! parallel and sequential paths produce identical grids.

use comp40_core::consts::BLOCK_SIZE;
use comp40_core::{BlockCoefficients, BlockPosition, Comp40Error, Comp40Result, Grid, YPbPr};
use rayon::prelude::*;

use crate::hadamard::{hadamard_forward, hadamard_inverse};

/// Transform four samples given in [`BlockPosition::ALL`] order
pub fn encode_block(samples: [YPbPr; 4]) -> BlockCoefficients {
    let [a, b, c, d] = hadamard_forward(samples.map(|s| s.y));
    BlockCoefficients {
        a,
        b,
        c,
        d,
        avg_pb: samples.iter().map(|s| s.pb).sum::<f32>() / 4.0,
        avg_pr: samples.iter().map(|s| s.pr).sum::<f32>() / 4.0,
    }
}

/// Reconstruct four samples in [`BlockPosition::ALL`] order
///
/// Luma is recovered per pixel; the averaged chroma is shared by all four.
pub fn decode_block(coefficients: &BlockCoefficients) -> [YPbPr; 4] {
    let luma = hadamard_inverse([
        coefficients.a,
        coefficients.b,
        coefficients.c,
        coefficients.d,
    ]);
    luma.map(|y| YPbPr::new(y, coefficients.avg_pb, coefficients.avg_pr))
}

/// One coefficient record per block, row-major over the block grid
pub fn aggregate_blocks(
    samples: &Grid<YPbPr>,
    parallel: bool,
) -> Comp40Result<Grid<BlockCoefficients>> {
    let dims = samples.dimensions();
    if !dims.is_even() {
        return Err(Comp40Error::InvalidDimensions {
            width: dims.width,
            height: dims.height,
        });
    }

    let blocks = dims.in_blocks();
    let bw = blocks.width as usize;
    let encode = |i: usize| encode_block(samples.block(i % bw, i / bw));

    let cells = if parallel {
        (0..blocks.pixel_count()).into_par_iter().map(encode).collect()
    } else {
        (0..blocks.pixel_count()).map(encode).collect()
    };

    Grid::from_vec(blocks, cells)
}

/// Expand a block grid back to one sample per pixel
pub fn scatter_blocks(coefficients: &Grid<BlockCoefficients>, parallel: bool) -> Grid<YPbPr> {
    let blocks = coefficients.dimensions();
    let dims = comp40_core::Dimensions::from_blocks(blocks);
    let mut samples = Grid::new(dims);
    if dims.is_empty() {
        return samples;
    }

    let width = dims.width as usize;
    let fill_block_row = |(by, rows): (usize, &mut [YPbPr])| {
        for bx in 0..blocks.width as usize {
            let decoded = decode_block(coefficients.at(bx, by));
            for (pos, sample) in BlockPosition::ALL.into_iter().zip(decoded) {
                let (dx, dy) = pos.offset();
                rows[dy * width + bx * BLOCK_SIZE + dx] = sample;
            }
        }
    };

    // each chunk is the pair of pixel rows covered by one block row
    let row_pair = width * BLOCK_SIZE;
    if parallel {
        samples
            .cells_mut()
            .par_chunks_mut(row_pair)
            .enumerate()
            .for_each(fill_block_row);
    } else {
        samples
            .cells_mut()
            .chunks_mut(row_pair)
            .enumerate()
            .for_each(fill_block_row);
    }

    samples
}
