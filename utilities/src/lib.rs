pub extern crate rustfft;

// export rustfft to fftbench
use rand::{distributions::Uniform, prelude::*};

/// Asserts that two fixed-point values are within `epsilon` of each other.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[track_caller]
pub fn assert_int_closeness(actual: i32, expected: i32, epsilon: i32) {
    if (i64::from(actual) - i64::from(expected)).abs() > i64::from(epsilon) {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, integer signal in the provided buffers.
/// Every sample lies in `[-amplitude, amplitude]`.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()` or if `amplitude` is negative
pub fn gen_random_signal(reals: &mut [i32], imags: &mut [i32], amplitude: i32) {
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );
    assert!(amplitude >= 0);

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new_inclusive(-amplitude, amplitude);
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}
