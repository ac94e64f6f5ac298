//! Performance benchmarks for the numeric utilities.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use primer::quadratic::solve;
use primer::stats::*;
use primer::{is_prime, to_binary_digits};
use rand::{Rng, SeedableRng};

fn random_sequence(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

fn bench_aggregates(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregates");

    for size in [100, 1000, 10000].iter() {
        let seq = random_sequence(*size, 0);

        group.bench_with_input(BenchmarkId::new("largest", size), &seq, |b, seq| {
            b.iter(|| largest(black_box(seq)));
        });
        group.bench_with_input(BenchmarkId::new("average", size), &seq, |b, seq| {
            b.iter(|| average(black_box(seq)));
        });
        group.bench_with_input(BenchmarkId::new("summarize", size), &seq, |b, seq| {
            b.iter(|| summarize(black_box(seq)));
        });
    }
    group.finish();
}

fn bench_is_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");

    for n in [97i64, 7919, 2_147_483_647].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| is_prime(black_box(n)));
        });
    }
    group.finish();
}

fn bench_binary_digits(c: &mut Criterion) {
    c.bench_function("to_binary_digits", |b| {
        b.iter(|| to_binary_digits(black_box(i64::MAX)));
    });
}

fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve", |b| {
        b.iter(|| solve(black_box(1.0), black_box(-3.0), black_box(2.0)));
    });
}

criterion_group!(
    benches,
    bench_aggregates,
    bench_is_prime,
    bench_binary_digits,
    bench_solve
);

criterion_main!(benches);
