//! Benchmarks for the closest pair methods.

use closest_pair::input::random_points;
use closest_pair::{brute_force, ClosestPair, Method, Point};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generates a spiral used as a benchmark data set.
fn spiral(size: usize) -> Vec<Point<f64>> {
    let turns = 10.0;
    (0..size)
        .map(|i| {
            let r = (i as f64) / (size as f64);
            let theta = turns * r * std::f64::consts::TAU;
            let (sin, cos) = theta.sin_cos();
            Point::new(r * cos, r * sin)
        })
        .collect()
}

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("ClosestPair");

    for size in [1_000, 10_000, 100_000] {
        let uniform = random_points(&mut StdRng::seed_from_u64(size as u64), size, 1 << 30);
        let spiral = spiral(size);

        for method in [Method::Presorted, Method::Resort] {
            let search = ClosestPair::new().method(method);

            let id = BenchmarkId::new(format!("{method:?}/uniform"), size);
            group.bench_with_input(id, &uniform, |b, points| {
                b.iter(|| search.solve(black_box(points)))
            });

            let id = BenchmarkId::new(format!("{method:?}/spiral"), size);
            group.bench_with_input(id, &spiral, |b, points| {
                b.iter(|| search.solve(black_box(points)))
            });
        }
    }

    group.finish();
}

fn bench_brute_force(c: &mut Criterion) {
    let points = random_points(&mut StdRng::seed_from_u64(0), 1_000, 1 << 30);

    c.bench_function("brute_force/1000", |b| b.iter(|| brute_force(black_box(&points))));
    c.bench_function("Presorted/1000", |b| b.iter(|| ClosestPair::new().solve(black_box(&points))));
}

criterion_group!(benches, bench_methods, bench_brute_force);
criterion_main!(benches);
