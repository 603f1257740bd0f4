//! Fuzzy Hash Criterion Benchmark
//!
//! Hashing throughput across input sizes, streaming overhead and
//! signature comparison cost.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: ONE-SHOT THROUGHPUT
// =============================================================================

/// A single pass updates every live block size, and the number of live
/// slots stays small, so throughput should be flat across sizes.
fn bench_oneshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Oneshot");

    let sizes = [
        (64, "64B"),
        (4 * KB, "4KB"),
        (64 * KB, "64KB"),
        (MB, "1MB"),
        (16 * MB, "16MB"),
    ];

    for (size, name) in sizes {
        let input = random(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| spamsum::hash(black_box(data)).unwrap())
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: STREAMING
// =============================================================================

/// Chunked updates against a single update of the same input.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Streaming");
    let input = random(4 * MB);
    group.throughput(Throughput::Bytes(input.len() as u64));

    for chunk in [64, 4 * KB, 128 * KB] {
        group.bench_with_input(BenchmarkId::new("chunk", chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let mut hasher = spamsum::Hasher::new();
                for part in input.chunks(chunk) {
                    hasher.update(black_box(part));
                }
                hasher.finalize().unwrap()
            })
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: COMPARE
// =============================================================================

/// Identical, related and unrelated signature pairs.
fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Compare");

    let base = random(256 * KB);
    let mut edited = base.clone();
    edited[128 * KB..128 * KB + 64].fill(0);

    let a = spamsum::hash(&base).unwrap();
    let b = spamsum::hash(&edited).unwrap();
    let unrelated = spamsum::hash(&random(256 * KB)).unwrap();

    let pairs = [
        ("identical", &a, &a),
        ("related", &a, &b),
        ("unrelated", &a, &unrelated),
    ];

    for (name, left, right) in pairs {
        group.bench_function(name, |bench| {
            bench.iter(|| spamsum::compare(black_box(left), black_box(right)).unwrap())
        });
    }

    let (sa, sb): (spamsum::Signature, spamsum::Signature) = (a.parse().unwrap(), b.parse().unwrap());
    group.bench_function("parsed", |bench| {
        bench.iter(|| black_box(&sa).similarity(black_box(&sb)))
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 4: PARALLEL FILES
// =============================================================================

/// Many independent inputs hashed on the rayon pool, as the CLI does.
#[cfg(feature = "multithread")]
fn bench_parallel_files(c: &mut Criterion) {
    use rayon::prelude::*;

    let mut group = c.benchmark_group("4-Parallel-Files");
    let files: Vec<Vec<u8>> = (0..64).map(|_| random(256 * KB)).collect();
    group.throughput(Throughput::Bytes((64 * 256 * KB) as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            files
                .iter()
                .map(|f| spamsum::hash(f).unwrap())
                .collect::<Vec<_>>()
        })
    });
    group.bench_function(format!("rayon-{}", rayon::current_num_threads()), |b| {
        b.iter(|| {
            files
                .par_iter()
                .map(|f| spamsum::hash(f).unwrap())
                .collect::<Vec<_>>()
        })
    });
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(benches, bench_oneshot, bench_streaming, bench_compare);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_parallel_files);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
