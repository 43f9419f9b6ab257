//! Utilities for parallelism

/// Split `reals` and `imags` into `slices` equal contiguous sub-ranges and call `op` once per
/// sub-range with its index, returning only after every call has returned.
///
/// Each call receives exclusive `&mut` sub-slices, so calls never share samples.
/// The calls run concurrently if and only if `parallel` is set, `slices > 1`, and the `parallel`
/// feature is enabled. Otherwise they run in slice order on the caller's thread.
///
/// # Panics
///
/// Panics if the buffers differ in length or cannot be split into `slices` non-empty parts
#[allow(unused_variables)] // when `parallel` feature is disabled, the variable is ignored
pub fn for_each_slice<F>(parallel: bool, slices: usize, reals: &mut [i32], imags: &mut [i32], op: F)
where
    F: Fn(usize, &mut [i32], &mut [i32]) + Send + Sync,
{
    assert_eq!(reals.len(), imags.len());
    assert!(slices > 0 && slices <= reals.len() && reals.len() % slices == 0);
    let slice_len = reals.len() / slices;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        if parallel && slices > 1 {
            reals
                .par_chunks_exact_mut(slice_len)
                .zip(imags.par_chunks_exact_mut(slice_len))
                .enumerate()
                .for_each(|(slice, (re, im))| op(slice, re, im));
        } else {
            run_in_order(slice_len, reals, imags, &op);
        }
    }
    #[cfg(not(feature = "parallel"))]
    {
        run_in_order(slice_len, reals, imags, &op);
    }
}

fn run_in_order<F>(slice_len: usize, reals: &mut [i32], imags: &mut [i32], op: &F)
where
    F: Fn(usize, &mut [i32], &mut [i32]),
{
    reals
        .chunks_exact_mut(slice_len)
        .zip(imags.chunks_exact_mut(slice_len))
        .enumerate()
        .for_each(|(slice, (re, im))| op(slice, re, im));
}
