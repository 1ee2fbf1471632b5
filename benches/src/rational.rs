use std::hint::black_box;

use arbsrc::prelude::*;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const TARGETS: &[f64] = &[1.5, 48000. / 44100., 1.0 / 3.0, std::f64::consts::PI];

fn approximation(c: &mut Criterion) {
    let mut group = c.benchmark_group("arbsrc/rational");

    TARGETS.iter().for_each(|&x| {
        group.bench_with_input(BenchmarkId::new("approximate", x), &x, |b, &x| {
            b.iter(|| approximate(black_box(x), 1e-6, 1000, 10).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("best_approximations", x), &x, |b, &x| {
            b.iter(|| best_approximations(black_box(x), 10))
        });
    });
    group.finish();
}

criterion_group!(benches, approximation);
criterion_main!(benches);
