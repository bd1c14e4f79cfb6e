// ─────────────────────────────────────────────────────────────────────
// Liftline Kernel — Interpolation Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for table search and polar lookup.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use liftline_interp::{bisection_search, linear_each, linear_monotonic, AirfoilLookup, AirfoilTable};

fn table(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    (xs, ys)
}

// ── bisection_search() ──────────────────────────────────────────────

fn bench_bisection_1000(c: &mut Criterion) {
    let (xs, _) = table(1000);
    c.bench_function("bisection_1000", |b| {
        b.iter(|| bisection_search(black_box(&xs), black_box(42.37)))
    });
}

// ── linear_monotonic() vs linear_each() ─────────────────────────────

fn bench_monotonic_pass(c: &mut Criterion) {
    let (xs, ys) = table(1000);
    let xout: Vec<f64> = (0..5000).map(|i| i as f64 * 0.02).collect();
    let mut yout = vec![0.0; xout.len()];
    c.bench_function("linear_monotonic_5000", |b| {
        b.iter(|| linear_monotonic(black_box(&xs), &ys, black_box(&xout), &mut yout))
    });
}

fn bench_independent_pass(c: &mut Criterion) {
    let (xs, ys) = table(1000);
    let xout: Vec<f64> = (0..5000).map(|i| i as f64 * 0.02).collect();
    let mut yout = vec![0.0; xout.len()];
    c.bench_function("linear_each_5000", |b| {
        b.iter(|| linear_each(black_box(&xs), &ys, black_box(&xout), &mut yout))
    });
}

// ── AirfoilTable.lookup() ───────────────────────────────────────────

fn bench_polar_lookup(c: &mut Criterion) {
    let aoa: Vec<f64> = (-180..=180).map(f64::from).collect();
    let cl: Vec<f64> = aoa.iter().map(|a| 1.1 * (2.0 * a.to_radians()).sin()).collect();
    let cd: Vec<f64> = aoa.iter().map(|a| 0.01 + 1.8 * a.to_radians().sin().powi(2)).collect();
    let polar = AirfoilTable::from_degrees(&aoa, cl, cd).expect("polar");
    c.bench_function("polar_lookup", |b| {
        b.iter(|| polar.lookup(black_box(0.0873)))
    });
}

criterion_group!(
    benches,
    bench_bisection_1000,
    bench_monotonic_pass,
    bench_independent_pass,
    bench_polar_lookup,
);
criterion_main!(benches);
