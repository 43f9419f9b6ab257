//! Benchmark harness: reference input, spectrum report and timing
//!
//! A report looks like this:
//!
//! ```text
//! fft_bench v1.2
//! Freq.    Magnitude
//! 00000000 000001fe
//! 000000c0 000001ff
//! 00000140 000001ff
//! 00000200 000001ff
//! 1024 point bit-reversal and butterfly run time = 12 us
//! ```
use std::io::{self, Write};
use std::time::{Duration, Instant};

use tracing::info;

use crate::algorithms::dit::fft_dit_with_planner;
use crate::error::Result;
use crate::kernels::common::Q12_ONE;
use crate::planner::Planner;
use crate::utils::isqrt;
use crate::FFT_SIZE;

/// First line of the report
pub const BANNER: &str = "fft_bench v1.2";

/// Header of the spectrum table
pub const SPECTRUM_HEADER: &str = "Freq.    Magnitude";

// 16 samples of one cosine period in Q12
const INPUT: [i32; 16] = [
    4096, 3784, 2896, 1567, 0, -1567, -2896, -3784, -4096, -3784, -2896, -1567, 0, 1567, 2896,
    3784,
];

/// Fill `reals` with the reference test signal and clear `imags`.
///
/// The signal mixes the 16 sample cosine at 3 and 5 times its base rate, the highest
/// representable frequency, and a DC level.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn fill_input(reals: &mut [i32], imags: &mut [i32]) {
    assert_eq!(reals.len(), imags.len());

    for (k, (re, im)) in reals.iter_mut().zip(imags.iter_mut()).enumerate() {
        // Two frequencies of the waveform
        let mut x = INPUT[(3 * k) % 16] / 4 + INPUT[(5 * k) % 16] / 4;

        // The highest frequency
        x += if k & 1 != 0 { Q12_ONE / 8 } else { -Q12_ONE / 8 };

        // A DC level
        x += Q12_ONE / 8;

        *re = x;
        *im = 0;
    }
}

/// One reported frequency bin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bin {
    /// Bin index, `0..=FFT_SIZE / 2`
    pub index: usize,
    /// `isqrt(re² + im²)` of the bin scaled down by `FFT_SIZE`
    pub magnitude: i64,
}

/// The non-zero bins of the first half of a transformed buffer, in increasing order.
///
/// Each component is divided by `FFT_SIZE`, truncating toward zero, before the magnitude is
/// taken. Squares are summed in 64 bits.
///
/// # Panics
///
/// Panics if either buffer is not `FFT_SIZE` long
pub fn spectrum<'a>(reals: &'a [i32], imags: &'a [i32]) -> impl Iterator<Item = Bin> + 'a {
    assert_eq!(reals.len(), FFT_SIZE);
    assert_eq!(imags.len(), FFT_SIZE);

    let scale = FFT_SIZE as i32;
    reals
        .iter()
        .zip(imags.iter())
        .take(FFT_SIZE / 2 + 1)
        .enumerate()
        .map(move |(index, (&re, &im))| {
            let re = i64::from(re / scale);
            let im = i64::from(im / scale);
            Bin {
                index,
                magnitude: isqrt(re * re + im * im),
            }
        })
        .filter(|bin| bin.magnitude > 0)
}

/// Write the spectrum table for a transformed buffer.
pub fn write_spectrum<W: Write>(out: &mut W, reals: &[i32], imags: &[i32]) -> io::Result<()> {
    writeln!(out, "{SPECTRUM_HEADER}")?;
    for bin in spectrum(reals, imags) {
        writeln!(out, "{:08x} {:08x}", bin.index, bin.magnitude)?;
    }
    Ok(())
}

/// Bit-reverse and transform the buffers, returning the wall-clock time taken.
pub fn time_transform(reals: &mut [i32], imags: &mut [i32], planner: &Planner) -> Duration {
    let now = Instant::now();
    fft_dit_with_planner(reals, imags, planner);
    now.elapsed()
}

/// Run the benchmark `runs` times and write the report to `out`.
///
/// Every run refills the buffers with the reference signal. The spectrum of the last run is
/// printed once, followed by one timing line per run. At least one run is always made.
///
/// # Errors
///
/// Fails if writing to `out` fails
pub fn run_bench<W: Write>(out: &mut W, planner: &Planner, runs: usize) -> Result<Vec<Duration>> {
    writeln!(out, "{BANNER}")?;

    let mut reals = [0i32; FFT_SIZE];
    let mut imags = [0i32; FFT_SIZE];
    let mut timings = Vec::with_capacity(runs.max(1));

    for run in 0..runs.max(1) {
        fill_input(&mut reals, &mut imags);
        let elapsed = time_transform(&mut reals, &mut imags, planner);
        info!(run, elapsed_us = elapsed.as_micros() as u64, "benchmark run");
        timings.push(elapsed);
    }

    write_spectrum(out, &reals, &imags)?;
    for elapsed in &timings {
        writeln!(
            out,
            "{FFT_SIZE} point bit-reversal and butterfly run time = {} us",
            elapsed.as_micros()
        )?;
    }

    Ok(timings)
}

/// The benchmark entry point: one run of the reference plan, reported on stdout.
///
/// # Errors
///
/// Fails if stdout cannot be written
pub fn fft_bench() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_bench(&mut out, &Planner::reference(), 1)?;
    out.flush()?;
    Ok(())
}
