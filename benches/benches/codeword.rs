//! Benchmarks for bit field packing and codeword streams
//!
//! Run with: cargo bench --bench codeword

use comp40_bitstream::{extract_signed, insert_signed, pack, unpack, CodewordReader, CodewordWriter};
use comp40_core::QuantizedBlock;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn sample_blocks(count: usize) -> Vec<QuantizedBlock> {
    (0..count)
        .map(|i| QuantizedBlock {
            a: (i % 512) as u16,
            b: (i % 31) as i8 - 15,
            c: (i % 29) as i8 - 14,
            d: (i % 23) as i8 - 11,
            pb: (i % 16) as u8,
            pr: ((i / 16) % 16) as u8,
        })
        .collect()
}

fn bench_bitpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bit Fields");

    group.bench_function("insert_extract_signed", |b| {
        b.iter(|| {
            let word = insert_signed(black_box(0), 5, 13, black_box(-9));
            extract_signed(word, 5, 13)
        });
    });

    group.finish();
}

fn bench_codeword(c: &mut Criterion) {
    let blocks = sample_blocks(4096);
    let words: Vec<u32> = blocks.iter().map(pack).collect();

    let mut group = c.benchmark_group("Codewords");
    group.throughput(Throughput::Elements(blocks.len() as u64));

    group.bench_function("pack", |b| {
        b.iter(|| blocks.iter().fold(0u32, |acc, block| acc ^ pack(black_box(block))));
    });

    group.bench_function("unpack", |b| {
        b.iter(|| {
            words
                .iter()
                .fold(0u32, |acc, &w| acc ^ unpack(black_box(w)).a as u32)
        });
    });

    group.bench_function("write_read_stream", |b| {
        b.iter(|| {
            let mut writer = CodewordWriter::new(Vec::with_capacity(blocks.len() * 4));
            writer.write_blocks(&blocks).unwrap();
            let bytes = writer.into_inner();
            let mut reader = CodewordReader::new(&bytes[..]);
            reader.read_blocks(blocks.len()).unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_bitpack, bench_codeword);
criterion_main!(benches);
