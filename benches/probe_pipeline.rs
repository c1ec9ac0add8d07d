//! Benchmarks for the probe pipeline
//!
//! Marker location over a full first block, payload decoding and the
//! end-to-end in-memory probe.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flptime_probe::{
    constants::BLOCK_SIZE, decode_minutes, extract_payload, format_minutes, probe_bytes,
    PayloadBytes,
};

/// A block with the marker record at `pos` and a few decoy marker bytes
/// before it.
fn block_with_marker_at(pos: usize) -> Vec<u8> {
    let mut block = vec![0u8; BLOCK_SIZE];
    for decoy in (0..pos).step_by(97) {
        block[decoy] = 0xED;
    }
    block[pos] = 0xED;
    block[pos + 1] = 0x10;
    block[pos + 15..pos + 18].copy_from_slice(&[0x30, 0xB5, 0x3F]);
    block
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    for pos in [32usize, 1024, BLOCK_SIZE - 18] {
        let block = block_with_marker_at(pos);
        group.bench_with_input(BenchmarkId::new("extract_payload", pos), &block, |b, block| {
            b.iter(|| extract_payload(black_box(block)));
        });
    }

    let empty = vec![0u8; BLOCK_SIZE];
    group.bench_with_input(BenchmarkId::new("extract_payload", "missing"), &empty, |b, block| {
        b.iter(|| extract_payload(black_box(block)));
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let small = PayloadBytes::new([0x10, 0x67, 0x3F]);
    let large = PayloadBytes::new([0x40, 0xDC, 0x3F]);

    group.bench_function("decode_minutes/small", |b| {
        b.iter(|| decode_minutes(black_box(&small)));
    });

    group.bench_function("decode_minutes/large", |b| {
        b.iter(|| decode_minutes(black_box(&large)));
    });

    group.bench_function("format_minutes", |b| {
        b.iter(|| format_minutes(black_box(6_001)));
    });

    group.finish();
}

fn bench_full_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_probe");

    let mut data = block_with_marker_at(512);
    data.resize(BLOCK_SIZE * 64, 0x42);
    group.bench_function("probe_bytes", |b| {
        b.iter(|| probe_bytes(black_box(&data)));
    });

    group.finish();
}

criterion_group!(benches, bench_locate, bench_decode, bench_full_probe);
criterion_main!(benches);
