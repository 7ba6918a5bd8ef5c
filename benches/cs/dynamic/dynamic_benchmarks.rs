use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dynsolve::dynamic::{
    edit_distance, knapsack_exact, knapsack_seeded, longest_increasing_subsequence,
    max_value_path, min_coins_exact, min_coins_seeded, EditCosts,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_coin_change(c: &mut Criterion) {
    let coins = [200, 100, 50, 20, 10, 5, 2, 1];
    let mut group = c.benchmark_group("coin_change");
    for &target in &[99, 999, 9999] {
        group.bench_with_input(BenchmarkId::new("seeded", target), &target, |b, &t| {
            b.iter(|| min_coins_seeded(black_box(&coins), t))
        });
        group.bench_with_input(BenchmarkId::new("exact", target), &target, |b, &t| {
            b.iter(|| min_coins_exact(black_box(&coins), t))
        });
    }
    group.finish();
}

fn bench_lis(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut group = c.benchmark_group("longest_increasing_subsequence");
    for &size in &[100, 1000] {
        let data: Vec<i32> = (0..size).map(|_| rng.gen_range(0..10_000)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| longest_increasing_subsequence(black_box(data)))
        });
    }
    group.finish();
}

fn bench_grid_path(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let mut group = c.benchmark_group("grid_path");
    for &size in &[16, 128] {
        let grid: Vec<Vec<u64>> = (0..size)
            .map(|_| (0..size).map(|_| rng.gen_range(0..100)).collect())
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| max_value_path(black_box(grid)))
        });
    }
    group.finish();
}

fn bench_knapsack(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let mut weights: Vec<usize> = (0..64).map(|_| rng.gen_range(1..50)).collect();
    weights.sort_unstable();
    let values: Vec<usize> = (0..64).map(|_| rng.gen_range(1..100)).collect();

    let mut group = c.benchmark_group("knapsack");
    group.bench_function("seeded", |b| {
        b.iter(|| knapsack_seeded(black_box(&weights), black_box(&values), 500))
    });
    group.bench_function("exact", |b| {
        b.iter(|| knapsack_exact(black_box(&weights), black_box(&values), 500))
    });
    group.finish();
}

fn bench_edit_distance(c: &mut Criterion) {
    let costs = EditCosts::default();
    let source = "the quick brown fox jumps over the lazy dog".repeat(4);
    let destination = "a quick brown dog leaps over the lazy fox".repeat(4);
    c.bench_function("edit_distance", |b| {
        b.iter(|| edit_distance(black_box(&source), black_box(&destination), &costs))
    });
}

criterion_group!(
    benches,
    bench_coin_change,
    bench_lis,
    bench_grid_path,
    bench_knapsack,
    bench_edit_distance
);
criterion_main!(benches);
