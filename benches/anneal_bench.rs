//! Criterion benchmarks for the knapsack annealer.
//!
//! Uses synthetic uniform-random instances to measure full-run cost
//! across instance sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_anneal::knapsack::Instance;
use knapsack_anneal::sa::{SaConfig, SaRunner};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_instance(n: usize, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let profit: Vec<u64> = (0..n).map(|_| rng.random_range(1..100)).collect();
    let weight: Vec<u64> = (0..n).map(|_| rng.random_range(1..50)).collect();
    let capacity = weight.iter().sum::<u64>() / 2;
    Instance::new(capacity, profit, weight).expect("parallel vectors by construction")
}

fn bench_sa_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_run");
    for n in [20, 100, 500] {
        let instance = random_instance(n, 7);
        let config = SaConfig::default().with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, instance| {
            b.iter(|| SaRunner::run(black_box(instance), black_box(&config)).unwrap());
        });
    }
    group.finish();
}

fn bench_greedy_via_tiny_budget(c: &mut Criterion) {
    // Isolates construction plus one near-empty search from the full
    // annealing cost.
    let instance = random_instance(500, 7);
    let config = SaConfig::default()
        .with_max_inner_iterations(1)
        .with_no_improve_limit(1)
        .with_seed(42);
    c.bench_function("sa_run_minimal_budget", |b| {
        b.iter(|| SaRunner::run(black_box(&instance), black_box(&config)).unwrap());
    });
}

criterion_group!(benches, bench_sa_run, bench_greedy_via_tiny_budget);
criterion_main!(benches);
