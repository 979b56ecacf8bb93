//! Decision benchmarks for warlord_core.
//!
//! Run with: `cargo bench -p warlord_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use warlord_core::prelude::*;
use warlord_test_utils::fixtures::{crowded_world, kid};

/// One kingdom's turn as the world grows.
pub fn decide_benchmark(c: &mut Criterion) {
    let engine = DecisionEngine::default();
    let mut group = c.benchmark_group("decide");
    for per_kingdom in [8u32, 32, 128] {
        let world = crowded_world(8, per_kingdom);
        let kingdom = kid("k0");
        group.bench_with_input(BenchmarkId::from_parameter(per_kingdom), &world, |b, world| {
            b.iter(|| engine.decide(black_box(world), black_box(&kingdom)));
        });
    }
    group.finish();
}

/// Every AI kingdom's turn.
pub fn plan_benchmark(c: &mut Criterion) {
    let engine = DecisionEngine::default();
    let world = crowded_world(16, 32);
    c.bench_function("plan_turns", |b| {
        b.iter(|| plan_turns(black_box(&world), &engine));
    });
}

criterion_group!(benches, decide_benchmark, plan_benchmark);
criterion_main!(benches);
