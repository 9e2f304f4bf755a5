//! Benchmarks for color and block transforms
//!
//! Run with: cargo bench --bench transforms

use comp40_color::{rgb_to_ypbpr, ypbpr_to_rgb, Arith40Chroma};
use comp40_core::*;
use comp40_transform::{
    aggregate_blocks, dequantize_block, encode_block, decode_block, hadamard_forward,
    hadamard_inverse, quantize_block, scatter_blocks,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn component_grid(width: u32, height: u32) -> Grid<YPbPr> {
    let dims = Dimensions::new(width, height);
    let cells = (0..dims.pixel_count())
        .map(|i| {
            let t = (i % 255) as f32 / 255.0;
            YPbPr::new(t, (t - 0.5) * 0.4, (0.5 - t) * 0.3)
        })
        .collect();
    Grid::from_vec(dims, cells).unwrap()
}

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color Conversion");

    group.bench_function("rgb_to_ypbpr", |b| {
        b.iter(|| rgb_to_ypbpr(black_box(Rgb::new(200, 100, 50)), 255));
    });

    group.bench_function("ypbpr_to_rgb", |b| {
        b.iter(|| ypbpr_to_rgb(black_box(YPbPr::new(0.5, 0.1, -0.1))));
    });

    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("Block Transform");
    let samples = [
        YPbPr::new(0.1, 0.0, 0.0),
        YPbPr::new(0.4, 0.1, 0.0),
        YPbPr::new(0.6, 0.0, -0.1),
        YPbPr::new(0.9, 0.1, -0.1),
    ];

    group.bench_function("hadamard_roundtrip", |b| {
        b.iter(|| hadamard_inverse(hadamard_forward(black_box([0.1, 0.4, 0.6, 0.9]))));
    });

    group.bench_function("encode_quantize_block", |b| {
        b.iter(|| quantize_block(&encode_block(black_box(samples)), &Arith40Chroma));
    });

    group.bench_function("dequantize_decode_block", |b| {
        let quantized = quantize_block(&encode_block(samples), &Arith40Chroma);
        b.iter(|| decode_block(&dequantize_block(black_box(&quantized), &Arith40Chroma)));
    });

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("Block Grid");
    let grid = component_grid(512, 512);

    for parallel in [false, true] {
        let label = if parallel { "parallel" } else { "sequential" };

        group.bench_with_input(BenchmarkId::new("aggregate", label), &parallel, |b, &p| {
            b.iter(|| aggregate_blocks(black_box(&grid), p).unwrap());
        });

        let coefficients = aggregate_blocks(&grid, parallel).unwrap();
        group.bench_with_input(BenchmarkId::new("scatter", label), &parallel, |b, &p| {
            b.iter(|| scatter_blocks(black_box(&coefficients), p));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_color, bench_block, bench_grid);
criterion_main!(benches);
