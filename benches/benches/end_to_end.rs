//! End-to-end compression/decompression benchmarks
//!
//! Run with: cargo bench --bench end_to_end

use comp40_core::*;
use comp40_decoder::{Comp40Decoder, DecoderOptions};
use comp40_encoder::{Comp40Encoder, EncoderOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn create_test_image(width: u32, height: u32) -> Raster {
    let dims = Dimensions::new(width, height);
    let mut pixels = Vec::with_capacity(dims.pixel_count());
    for y in 0..height {
        for x in 0..width {
            pixels.push(Rgb::new(
                ((x * 255) / width) as u16,
                ((y * 255) / height) as u16,
                128,
            ));
        }
    }
    Raster::from_pixels(dims, 255, pixels).unwrap()
}

fn bench_encode_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode by Image Size");

    for &size in &[64u32, 256, 1024] {
        let image = create_test_image(size, size);
        group.throughput(Throughput::Elements((size * size) as u64));

        for parallel in [false, true] {
            let encoder = Comp40Encoder::new(EncoderOptions::new().parallel(parallel));
            let id = format!("{}x{}/{}", size, size, if parallel { "par" } else { "seq" });
            group.bench_with_input(BenchmarkId::from_parameter(id), &image, |b, image| {
                b.iter(|| encoder.encode_to_vec(black_box(image)).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_decode_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode by Image Size");

    for &size in &[64u32, 256, 1024] {
        let encoded = Comp40Encoder::new(EncoderOptions::default())
            .encode_to_vec(&create_test_image(size, size))
            .unwrap();
        group.throughput(Throughput::Elements((size * size) as u64));

        for parallel in [false, true] {
            let id = format!("{}x{}/{}", size, size, if parallel { "par" } else { "seq" });
            group.bench_with_input(BenchmarkId::from_parameter(id), &encoded, |b, data| {
                b.iter(|| {
                    let options = DecoderOptions::new().parallel(parallel);
                    Comp40Decoder::with_options(options)
                        .decode(black_box(&data[..]))
                        .unwrap()
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_encode_by_size, bench_decode_by_size);
criterion_main!(benches);
