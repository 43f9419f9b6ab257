//! Error types for fftbench.

use thiserror::Error;

/// Errors raised while planning or running the benchmark.
///
/// Transform preconditions on buffer lengths are not represented here; they panic.
#[derive(Debug, Error)]
pub enum Error {
    /// The starting slice count is not a power of two.
    #[error("slice count must be a power of two, got {slices}")]
    SlicesNotPowerOfTwo {
        /// Requested slice count.
        slices: usize,
    },

    /// More slices than flights at the first decimation level.
    #[error("slice count {slices} exceeds the maximum of {max}")]
    TooManySlices {
        /// Requested slice count.
        slices: usize,
        /// Largest valid slice count.
        max: usize,
    },

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// A dedicated worker pool could not be built.
    #[cfg(feature = "parallel")]
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
