//! Decimation-in-Time (DIT) FFT Implementation
//!
//! The DIT algorithm decomposes the DFT from small to large sub-problems. Input is processed in
//! bit-reversed order, and output is produced in natural order.
//!
//! ## Algorithm Overview
//!
//! 1. Apply bit-reversal to input data
//! 2. Start with small butterflies (size 2)
//! 3. Work up to stage `log(N)`, where `N` is the size of the input.
//!
//! ## Parallel Decomposition
//!
//! Flights of the early levels are confined to a small span of the buffer, so the planner splits
//! those levels across independent slices. Each later group halves the slice count and adds one
//! level, until the final level runs over the whole buffer. A group starts only after every slice
//! of the previous group has finished, since its flights read samples that other slices wrote.
//!
use tracing::{debug, trace};

use crate::algorithms::bit_reversal::decimate;
use crate::kernels::dit::fft_dit_butterflies;
use crate::parallel::for_each_slice;
use crate::planner::Planner;
use crate::FFT_SIZE;

/// Run the butterfly levels of every stage group, in order, on bit-reversed buffers.
///
/// # Panics
///
/// Panics if either buffer is not `FFT_SIZE` long
pub fn run_stage_groups(reals: &mut [i32], imags: &mut [i32], planner: &Planner) {
    assert_eq!(reals.len(), FFT_SIZE);
    assert_eq!(imags.len(), FFT_SIZE);

    for group in &planner.groups {
        debug!(
            slices = group.slices,
            first_level = group.first_level,
            last_level = group.last_level,
            "butterfly group"
        );

        for_each_slice(
            planner.parallel,
            group.slices,
            reals,
            imags,
            |slice, reals_slice, imags_slice| {
                trace!(slice, len = reals_slice.len(), "slice start");
                fft_dit_butterflies(
                    reals_slice,
                    imags_slice,
                    group.first_level,
                    group.last_level,
                    group.slices,
                    &planner.twiddles,
                );
            },
        );
    }
}

/// Fixed-point DIT FFT with a pre-computed planner
///
/// Transforms `FFT_SIZE` complex samples in place. No second buffer is allocated.
///
/// # Arguments
///
/// * `reals` - Real components of the signal (modified in-place)
/// * `imags` - Imaginary components of the signal (modified in-place)
/// * `planner` - Twiddle table and stage groups
///
/// # Panics
///
/// Panics if either buffer is not `FFT_SIZE` long
pub fn fft_dit_with_planner(reals: &mut [i32], imags: &mut [i32], planner: &Planner) {
    assert_eq!(reals.len(), imags.len());
    assert_eq!(reals.len(), FFT_SIZE);

    // DIT requires bit-reversed input
    decimate(reals, imags);

    run_stage_groups(reals, imags, planner);
}

/// Fixed-point DIT FFT using the reference plan
///
/// See [`fft_dit_with_planner`].
pub fn fft_dit(reals: &mut [i32], imags: &mut [i32]) {
    fft_dit_with_planner(reals, imags, &Planner::reference());
}
