use std::hint::black_box;

use arbsrc::prelude::*;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use itertools::Itertools;

const RATES: &[(f64, f64)] = &[(8000., 12000.), (48000., 44100.), (44100., 48000.)];
const BLOCK: usize = 4096;

fn run<R: Resampler>(resampler: &mut R, input: &[R::Sample], next: &mut i64) {
    input.iter().for_each(|&x| {
        resampler.push(x);
        ((*next).max(resampler.min_output_index())..=resampler.max_output_index()).for_each(|n| {
            black_box(resampler.evaluate(n));
        });
        *next = resampler.max_output_index() + 1;
    });
}

fn float(c: &mut Criterion) {
    let mut group = c.benchmark_group("arbsrc/resampler/float");

    let input = (0..BLOCK)
        .map(|m| Complex::from_polar(1.0, 0.01 * m as f64))
        .collect_vec();
    RATES.iter().for_each(|&(in_rate, out_rate)| {
        group.bench_with_input(
            BenchmarkId::new("FloatResampler", format!("{in_rate}-{out_rate}")),
            &input,
            |b, input| {
                let mut resampler = FloatResampler::new(in_rate, out_rate).unwrap();
                let mut next = 0;
                b.iter(|| run(&mut resampler, black_box(input), &mut next))
            },
        );
    });
    group.finish();
}

fn fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("arbsrc/resampler/fixed");

    let input = (0..BLOCK)
        .map(|m| {
            let x = Complex::from_polar(16000.0, 0.01 * m as f64);
            Complex::new(x.re as i16, x.im as i16)
        })
        .collect_vec();
    RATES.iter().for_each(|&(in_rate, out_rate)| {
        let id = format!("{in_rate}-{out_rate}");
        group.bench_with_input(
            BenchmarkId::new("FixedPointResampler", &id),
            &input,
            |b, input| {
                let mut resampler = FixedPointResampler::new(in_rate, out_rate).unwrap();
                let mut next = 0;
                b.iter(|| run(&mut resampler, black_box(input), &mut next))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("FixedPointResamplerShift", &id),
            &input,
            |b, input| {
                let mut resampler = FixedPointResamplerShift::new(in_rate, out_rate).unwrap();
                let mut next = 0;
                b.iter(|| run(&mut resampler, black_box(input), &mut next))
            },
        );
    });
    group.finish();
}

criterion_group!(benches, float, fixed);
criterion_main!(benches);
