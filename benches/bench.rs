use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use fftbench::harness::fill_input;
use fftbench::{fft_dit_with_planner, Options, Planner, TwiddleSource, FFT_SIZE};
use utilities::gen_random_signal;

const INITIAL_SLICES: &[usize] = &[1, 2, 4, 8, 16];

fn reference_signal() -> (Vec<i32>, Vec<i32>) {
    let mut reals = vec![0; FFT_SIZE];
    let mut imags = vec![0; FFT_SIZE];
    fill_input(&mut reals, &mut imags);
    (reals, imags)
}

fn random_signal() -> (Vec<i32>, Vec<i32>) {
    let mut reals = vec![0; FFT_SIZE];
    let mut imags = vec![0; FFT_SIZE];
    gen_random_signal(&mut reals, &mut imags, 256);
    (reals, imags)
}

fn benchmark_slices(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward i32");
    group.throughput(Throughput::Elements(FFT_SIZE as u64));

    for &slices in INITIAL_SLICES {
        for parallel in [true, false] {
            let mut options = Options::with_initial_slices(slices);
            options.parallel = parallel;
            let planner = Planner::new(&options).unwrap();

            let id = if parallel {
                "fftbench parallel"
            } else {
                "fftbench sequential"
            };
            group.bench_function(BenchmarkId::new(id, slices), |b| {
                b.iter_batched(
                    reference_signal,
                    |(mut reals, mut imags)| {
                        fft_dit_with_planner(&mut reals, &mut imags, &planner);
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn benchmark_twiddles(c: &mut Criterion) {
    let mut group = c.benchmark_group("Twiddle source");
    group.throughput(Throughput::Elements(FFT_SIZE as u64));

    for twiddles in [TwiddleSource::Reference, TwiddleSource::Computed] {
        let mut options = Options::default();
        options.twiddles = twiddles;
        let planner = Planner::new(&options).unwrap();

        group.bench_function(BenchmarkId::new("fftbench", format!("{twiddles:?}")), |b| {
            b.iter_batched(
                random_signal,
                |(mut reals, mut imags)| {
                    fft_dit_with_planner(&mut reals, &mut imags, &planner);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_slices, benchmark_twiddles);
criterion_main!(benches);
