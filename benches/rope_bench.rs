//! Benchmarks for sequence tree operations matching the way a sequence pipeline uses them
//!
//! - Assembling a sequence by appending many short records
//! - Inserting into and splitting a large sequence
//! - Extracting substrings for downstream consumers

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flo_seq_rope::*;

/// Generate a DNA-like sequence of the requested length
fn generate_sequence(len: usize) -> String {
    const BASES: &[u8] = b"ACGT";

    (0..len)
        .map(|idx| BASES[(idx * 7 + idx / 3) % BASES.len()] as char)
        .collect()
}

/// Build a tree out of fixed-size records
fn assemble(records: usize, record_len: usize) -> SequenceTree {
    let record = generate_sequence(record_len);

    (0..records)
        .map(|_| SequenceTree::build(&record))
        .collect()
}

/// Benchmark appending short records one at a time
fn bench_append_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_records");

    for records in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(records), records, |b, &records| {
            b.iter(|| std::hint::black_box(assemble(records, 12)));
        });
    }
    group.finish();
}

/// Benchmark inserting a short fragment into the middle of a large sequence
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for records in [100, 1000, 10000].iter() {
        let tree        = assemble(*records, 150);
        let insertion   = SequenceTree::build("NNNN");

        group.bench_with_input(BenchmarkId::from_parameter(records), records, |b, _| {
            b.iter(|| {
                let mid = tree.len() / 2;
                std::hint::black_box(tree.insert(mid, &insertion).unwrap());
            });
        });
    }
    group.finish();
}

/// Benchmark splitting a large sequence at many points
fn bench_split(c: &mut Criterion) {
    let tree = assemble(10000, 150);

    c.bench_function("split_many_points", |b| {
        b.iter(|| {
            for pos in (0..tree.len()).step_by(tree.len() / 64) {
                std::hint::black_box(tree.split(pos).unwrap());
            }
        });
    });
}

/// Benchmark extracting windows for downstream consumers
fn bench_substr(c: &mut Criterion) {
    let tree = assemble(10000, 150);
    let mut group = c.benchmark_group("substr");

    for window in [16, 1024, 65536].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(window), window, |b, &window| {
            b.iter(|| {
                let start = tree.len() / 3;
                std::hint::black_box(tree.substr(start, window).unwrap().to_bytes());
            });
        });
    }
    group.finish();
}

/// Benchmark flattening a whole tree to text
fn bench_to_text(c: &mut Criterion) {
    let tree = assemble(10000, 150);

    c.bench_function("to_text", |b| {
        b.iter(|| std::hint::black_box(tree.to_text()));
    });
}

criterion_group!(
    benches,
    bench_append_records,
    bench_insert,
    bench_split,
    bench_substr,
    bench_to_text
);

criterion_main!(benches);
