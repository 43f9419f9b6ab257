//! The planner module provides a convenient interface for planning and executing the
//! fixed-point FFT. The planner validates the [`Options`] once, builds the twiddle table, and
//! pre-computes how the decimation levels are grouped and sliced.
use std::ops::RangeInclusive;

use tracing::debug;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::twiddles::TwiddleTable;
use crate::{FFT_SIZE, LOG2_FFT_SIZE};

/// Largest valid starting slice count. Each slice must own at least one level-0 flight.
pub const MAX_SLICES: usize = FFT_SIZE / 2;

/// A run of consecutive decimation levels executed over `slices` independent sub-ranges.
///
/// All slices of a group complete before the next group starts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StageGroup {
    /// Number of equal, contiguous sub-ranges of the buffers
    pub slices: usize,
    /// First decimation level of the group
    pub first_level: u32,
    /// Last decimation level of the group, inclusive
    pub last_level: u32,
}

impl StageGroup {
    /// The decimation levels covered by this group
    pub fn levels(&self) -> RangeInclusive<u32> {
        self.first_level..=self.last_level
    }

    /// Samples per slice
    pub fn slice_len(&self) -> usize {
        FFT_SIZE / self.slices
    }
}

/// Compute the stage groups for a starting slice count.
///
/// The first group covers levels `0..=L - log2(slices) - 1`. Each following group halves the slice
/// count and covers exactly one more level, until a single slice runs the final level.
/// Flights never cross a slice boundary: the widest flight of a group spans
/// `2^(last_level + 1) == FFT_SIZE / slices` samples.
pub fn schedule(initial_slices: usize) -> Result<Vec<StageGroup>> {
    if !initial_slices.is_power_of_two() {
        return Err(Error::SlicesNotPowerOfTwo {
            slices: initial_slices,
        });
    }
    if initial_slices > MAX_SLICES {
        return Err(Error::TooManySlices {
            slices: initial_slices,
            max: MAX_SLICES,
        });
    }

    Ok(stage_groups(initial_slices))
}

// `initial_slices` must already be a power of two no larger than `MAX_SLICES`
fn stage_groups(initial_slices: usize) -> Vec<StageGroup> {
    let mut groups = Vec::with_capacity(initial_slices.ilog2() as usize + 1);
    let mut slices = initial_slices;
    let mut first_level = 0;
    let mut last_level = LOG2_FFT_SIZE - initial_slices.ilog2() - 1;

    while slices >= 1 {
        groups.push(StageGroup {
            slices,
            first_level,
            last_level,
        });
        slices /= 2;
        first_level = last_level + 1;
        last_level += 1;
    }

    groups
}

/// A validated execution plan: twiddle factors and stage groups.
#[derive(Debug, Clone)]
pub struct Planner {
    /// The Q12 twiddle table shared by every slice
    pub twiddles: TwiddleTable,
    /// Stage groups in execution order
    pub groups: Vec<StageGroup>,
    /// Whether slices of a group are dispatched to worker threads
    pub parallel: bool,
}

impl Planner {
    /// Create a `Planner` from the given [`Options`].
    ///
    /// # Errors
    ///
    /// Fails if `options.initial_slices` is not a power of two in `1..=MAX_SLICES`
    pub fn new(options: &Options) -> Result<Self> {
        let groups = schedule(options.initial_slices)?;
        let twiddles = TwiddleTable::new(options.twiddles);

        debug!(
            initial_slices = options.initial_slices,
            twiddles = ?options.twiddles,
            parallel = options.parallel,
            groups = groups.len(),
            "planned fft"
        );

        Ok(Self {
            twiddles,
            groups,
            parallel: options.parallel,
        })
    }

    /// The benchmark's reference plan, built from [`Options::default`]
    pub fn reference() -> Self {
        let options = Options::default();
        Self {
            twiddles: TwiddleTable::new(options.twiddles),
            groups: stage_groups(options.initial_slices),
            parallel: options.parallel,
        }
    }
}
