//! igbinary Serialization Benchmark
//!
//! Encode and decode cost for flat string maps, integer lists and
//! string-heavy payloads that exercise the back-reference table.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use igbin::Value;
use rand::prelude::*;
use std::hint::black_box;

// =============================================================================
// PAYLOADS
// =============================================================================

fn string_map(n: usize) -> Value {
    (0..n)
        .map(|i| (format!("key-{i}"), format!("value-{}", i * 7)))
        .collect()
}

fn int_list(n: usize) -> Value {
    let mut rng = rand::rng();
    Value::list((0..n).map(|_| rng.random::<i64>() >> rng.random_range(0..63_u32)))
}

/// Few distinct strings repeated many times.
fn repetitive(n: usize) -> Value {
    let words = ["Ahoj", "světe", "alpha", "bravo"];
    Value::list((0..n).map(|i| words[i % words.len()]))
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_codec(c: &mut Criterion) {
    let payloads = [
        ("string-map", string_map(1_000)),
        ("int-list", int_list(10_000)),
        ("repetitive", repetitive(10_000)),
    ];

    let mut group = c.benchmark_group("igbinary");
    for (name, value) in &payloads {
        let bytes = igbin::to_vec(value).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", name), value, |b, v| {
            b.iter(|| igbin::to_vec(black_box(v)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", name), &bytes, |b, data| {
            b.iter(|| igbin::from_slice(black_box(data)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
