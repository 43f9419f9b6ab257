use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fftbench::algorithms::bit_reversal::decimate;
use fftbench::FFT_SIZE;

pub fn bit_reversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimate");

    for n in 4..=10 {
        let big_n = 1 << n;
        let mut reals: Vec<i32> = (0..big_n).collect();
        let mut imags: Vec<i32> = (0..big_n).map(|i| -i).collect();
        group.bench_with_input(criterion::BenchmarkId::new("decimate", big_n), &n, |b, _| {
            b.iter(|| decimate(black_box(&mut reals), black_box(&mut imags)))
        });
    }

    group.finish();
}

pub fn bit_reversal_fft_size(c: &mut Criterion) {
    let mut reals = vec![1; FFT_SIZE];
    let mut imags = vec![0; FFT_SIZE];
    c.bench_function("decimate1024", |b| {
        b.iter(|| decimate(black_box(&mut reals), black_box(&mut imags)))
    });
}

criterion_group!(benches, bit_reversal, bit_reversal_fft_size);
criterion_main!(benches);
