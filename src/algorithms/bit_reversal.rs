//! Bit-reversal permutation for the Decimation-in-Time input
//!
//! DIT consumes its input in bit-reversed order. The permutation is applied in place to the real
//! and imaginary buffers together, swapping each index with its reversal exactly once.

/// Reverse the `length` low order bits of `x`.
///
/// Swaps adjacent bits, then pairs, nibbles, bytes and half words, and finally shifts the
/// reversed word down to `length` bits.
///
/// # Panics
///
/// Panics in debug builds if `length` is `0` or greater than `32`
#[inline]
pub const fn bit_reverse(x: u32, length: u32) -> u32 {
    let mut rx = x;
    rx = ((rx & 0xaaaa_aaaa) >> 1) | ((rx & 0x5555_5555) << 1);
    rx = ((rx & 0xcccc_cccc) >> 2) | ((rx & 0x3333_3333) << 2);
    rx = ((rx & 0xf0f0_f0f0) >> 4) | ((rx & 0x0f0f_0f0f) << 4);
    rx = ((rx & 0xff00_ff00) >> 8) | ((rx & 0x00ff_00ff) << 8);
    rx = (rx >> 16) | (rx << 16);
    rx >> (32 - length)
}

/// Move every sample of `reals` and `imags` to the position given by reversing the bits of its
/// index. Applying it twice restores the original order.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()` or if the length is not a power of two
pub fn decimate(reals: &mut [i32], imags: &mut [i32]) {
    assert_eq!(reals.len(), imags.len());
    assert!(reals.len().is_power_of_two());

    let big_n = reals.len();
    if big_n < 2 {
        return;
    }
    let log_n = big_n.ilog2();

    for i in 0..big_n {
        let rev = bit_reverse(i as u32, log_n) as usize;
        // Palindromic indices stay put, every other pair is visited once from its lower end
        if i < rev {
            reals.swap(i, rev);
            imags.swap(i, rev);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FFT_SIZE, LOG2_FFT_SIZE};

    #[test]
    fn bit_reverse_known_values() {
        assert_eq!(bit_reverse(0, LOG2_FFT_SIZE), 0);
        assert_eq!(bit_reverse(1, LOG2_FFT_SIZE), 512);
        assert_eq!(bit_reverse(3, LOG2_FFT_SIZE), 768);
        assert_eq!(bit_reverse(0b10_0000_0001, LOG2_FFT_SIZE), 0b10_0000_0001);
        assert_eq!(bit_reverse(1023, LOG2_FFT_SIZE), 1023);
        assert_eq!(bit_reverse(0b110, 3), 0b011);
    }

    #[test]
    fn bit_reverse_is_an_involution() {
        for i in 0..FFT_SIZE as u32 {
            let rev = bit_reverse(i, LOG2_FFT_SIZE);
            assert!(rev < FFT_SIZE as u32);
            assert_eq!(bit_reverse(rev, LOG2_FFT_SIZE), i);
        }
    }

    #[test]
    fn bit_reverse_matches_std() {
        for length in 1..=32 {
            for x in [0u32, 1, 2, 5, 0x1234_5678, u32::MAX] {
                let x = if length == 32 { x } else { x & ((1 << length) - 1) };
                assert_eq!(
                    bit_reverse(x, length),
                    x.reverse_bits() >> (32 - length),
                    "x = {x:#x}, length = {length}"
                );
            }
        }
    }

    #[test]
    fn decimate_moves_samples_to_reversed_index() {
        let mut reals: Vec<i32> = (0..FFT_SIZE as i32).collect();
        let mut imags: Vec<i32> = (0..FFT_SIZE as i32).map(|i| -i).collect();
        decimate(&mut reals, &mut imags);

        for (i, (re, im)) in reals.iter().zip(imags.iter()).enumerate() {
            let expected = bit_reverse(i as u32, LOG2_FFT_SIZE) as i32;
            assert_eq!(*re, expected);
            assert_eq!(*im, -expected);
        }
    }

    #[test]
    fn decimate_twice_restores_order() {
        for log_n in 0..=LOG2_FFT_SIZE {
            let big_n = 1 << log_n;
            let original: Vec<i32> = (0..big_n).map(|i| i * 7 - 3).collect();
            let mut reals = original.clone();
            let mut imags: Vec<i32> = original.iter().map(|x| x ^ 0x55).collect();

            decimate(&mut reals, &mut imags);
            decimate(&mut reals, &mut imags);

            assert_eq!(reals, original);
            assert!(imags.iter().zip(original.iter()).all(|(im, x)| *im == x ^ 0x55));
        }
    }

    #[test]
    #[should_panic]
    fn decimate_rejects_mismatched_buffers() {
        let mut reals = vec![0; 8];
        let mut imags = vec![0; 4];
        decimate(&mut reals, &mut imags);
    }
}
