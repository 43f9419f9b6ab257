//! A 1024 point fixed-point FFT microbenchmark
//!
//! This is an in-place Radix-2 Decimation-in-Time FFT over `i32` samples with Q12 twiddle
//! factors. It exercises a platform's integer multiply throughput and, through the slicing of the
//! early butterfly levels, its ability to dispatch and join parallel work.
//!
//! The transform runs in three steps:
//!
//! 1. [`algorithms::bit_reversal::decimate`] reorders the samples in place
//! 2. the [`Planner`]'s stage groups fan the butterfly levels out over disjoint slices
//! 3. the spectrum is left in natural order in the same two buffers
//!
//! ```
//! use fftbench::{fft_dit, FFT_SIZE};
//!
//! let mut reals = vec![0; FFT_SIZE];
//! let mut imags = vec![0; FFT_SIZE];
//! reals[0] = 4096;
//!
//! fft_dit(&mut reals, &mut imags);
//!
//! assert!(reals.iter().all(|&re| re == 4096));
//! ```

pub mod algorithms;
pub mod error;
pub mod harness;
pub mod kernels;
pub mod options;
pub mod parallel;
pub mod planner;
pub mod twiddles;
pub mod utils;

pub use crate::algorithms::dit::{fft_dit, fft_dit_with_planner};
pub use crate::error::{Error, Result};
pub use crate::harness::fft_bench;
pub use crate::options::{Options, TwiddleSource};
pub use crate::planner::{Planner, StageGroup};
pub use crate::utils::isqrt;

/// Number of complex samples transformed.
///
/// Changing this requires a new twiddle table and may require a wider fixed-point format.
pub const FFT_SIZE: usize = 1024;

/// `log2(FFT_SIZE)`, the number of decimation levels
pub const LOG2_FFT_SIZE: u32 = 10;

const _: () = assert!(1 << LOG2_FFT_SIZE == FFT_SIZE);
