//! Verifier Benchmark
//!
//! Cost of each codec check and of a full run, sequential and parallel.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use roundtrip_verification::{CheckKind, Verifier, VerifierConfig};
use std::hint::black_box;

fn bench_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Checks");

    for kind in CheckKind::ALL {
        let verifier = Verifier::new(&VerifierConfig {
            only: vec![kind],
            ..VerifierConfig::default()
        });
        group.bench_function(kind.as_str(), |b| b.iter(|| black_box(verifier.run())));
    }

    for (name, parallel) in [("all-sequential", false), ("all-parallel", true)] {
        let verifier = Verifier::new(&VerifierConfig {
            parallel,
            ..VerifierConfig::default()
        });
        group.bench_function(name, |b| b.iter(|| black_box(verifier.run())));
    }
    group.finish();
}

criterion_group!(benches, bench_checks);
criterion_main!(benches);
