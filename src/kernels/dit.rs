//! DIT Butterfly Kernel
//!
//! Runs a contiguous range of decimation levels over one slice of the bit-reversed buffers.
//! At level `l` the slice is cut into flights of `2^(l+1)` samples; the first half of each
//! flight is combined with the second half using twiddles `W^(k * w_delta)`.
//!
use crate::kernels::common::butterfly_q12;
use crate::twiddles::TwiddleTable;
use crate::FFT_SIZE;

/// Per-level parameters of the butterfly network, as seen by one slice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Stage {
    /// Decimation level
    pub level: u32,
    /// Butterflies per flight, `2^level`
    pub flight_size: usize,
    /// Twiddle index stride between consecutive butterflies of a flight
    pub w_delta: usize,
    /// Flights in this slice at this level
    pub no_flights: usize,
}

impl Stage {
    /// Parameters of `first_level` for a slice that owns `1/slices` of the buffer
    pub fn first(first_level: u32, slices: usize) -> Self {
        let flight_size = 1 << first_level;
        let w_delta = FFT_SIZE / (2 * flight_size);
        Self {
            level: first_level,
            flight_size,
            w_delta,
            no_flights: w_delta / slices,
        }
    }

    /// Parameters of the following level
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            level: self.level + 1,
            flight_size: self.flight_size << 1,
            w_delta: self.w_delta >> 1,
            no_flights: self.no_flights >> 1,
        }
    }
}

/// Apply butterfly levels `first_level..=last_level` to one slice, in time-decimated order.
///
/// `reals` and `imags` are the slice's share of the full buffers, `FFT_SIZE / slices` samples
/// each. Twiddle strides are those of the full `FFT_SIZE` point transform, so every flight
/// must lie inside the slice: `2^(last_level + 1) <= FFT_SIZE / slices`.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
#[multiversion::multiversion(targets(
    "x86_64+avx2",
    "x86_64+sse4.2",
    "x86+avx2",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn fft_dit_butterflies(
    reals: &mut [i32],
    imags: &mut [i32],
    first_level: u32,
    last_level: u32,
    slices: usize,
    twiddles: &TwiddleTable,
) {
    assert_eq!(reals.len(), imags.len());
    debug_assert_eq!(reals.len() * slices, FFT_SIZE);

    let cos = twiddles.cosine_half_cycle();
    let neg_sin = twiddles.neg_sine_half_cycle();

    let mut stage = Stage::first(first_level, slices);
    while stage.level <= last_level {
        let dist = stage.flight_size;
        let chunk_size = dist << 1;
        debug_assert_eq!(reals.len() / chunk_size, stage.no_flights);

        reals
            .chunks_exact_mut(chunk_size)
            .zip(imags.chunks_exact_mut(chunk_size))
            .for_each(|(reals_chunk, imags_chunk)| {
                let (reals_s0, reals_s1) = reals_chunk.split_at_mut(dist);
                let (imags_s0, imags_s1) = imags_chunk.split_at_mut(dist);

                reals_s0
                    .iter_mut()
                    .zip(reals_s1.iter_mut())
                    .zip(imags_s0.iter_mut().zip(imags_s1.iter_mut()))
                    .zip(
                        cos.iter()
                            .step_by(stage.w_delta)
                            .zip(neg_sin.iter().step_by(stage.w_delta)),
                    )
                    .for_each(|(((x0, x1), (y0, y1)), (&c, &d))| {
                        butterfly_q12(x0, y0, x1, y1, i32::from(c), i32::from(d));
                    });
            });

        stage = stage.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bit_reversal::decimate;
    use crate::LOG2_FFT_SIZE;

    fn test_signal() -> (Vec<i32>, Vec<i32>) {
        let reals = (0..FFT_SIZE as i32).map(|i| (i * 37) % 511 - 255).collect();
        let imags = (0..FFT_SIZE as i32).map(|i| (i * 91) % 257 - 128).collect();
        (reals, imags)
    }

    #[test]
    fn stage_progression() {
        let stage = Stage::first(0, 4);
        assert_eq!(
            stage,
            Stage {
                level: 0,
                flight_size: 1,
                w_delta: 512,
                no_flights: 128
            }
        );

        let mut stage = stage;
        for _ in 0..7 {
            stage = stage.next();
        }
        assert_eq!(
            stage,
            Stage {
                level: 7,
                flight_size: 128,
                w_delta: 4,
                no_flights: 1
            }
        );

        assert_eq!(
            Stage::first(9, 1),
            Stage {
                level: 9,
                flight_size: 512,
                w_delta: 1,
                no_flights: 1
            }
        );
    }

    #[test]
    fn first_level_combines_neighbours() {
        let twiddles = TwiddleTable::reference();
        let mut reals = vec![0; FFT_SIZE];
        let mut imags = vec![0; FFT_SIZE];
        reals[1] = 4096;
        reals[2] = 100;

        fft_dit_butterflies(&mut reals, &mut imags, 0, 0, 1, &twiddles);

        // W^0 is 4095/4096 in the reference table
        assert_eq!(&reals[..4], &[4095, -4095, 100, 100]);
        assert!(imags.iter().all(|&im| im == 0));
        assert!(reals[4..].iter().all(|&re| re == 0));
    }

    #[test]
    fn impulse_gives_flat_spectrum() {
        let twiddles = TwiddleTable::reference();
        let mut reals = vec![0; FFT_SIZE];
        let mut imags = vec![0; FFT_SIZE];
        reals[0] = 4096;

        decimate(&mut reals, &mut imags);
        fft_dit_butterflies(&mut reals, &mut imags, 0, LOG2_FFT_SIZE - 1, 1, &twiddles);

        assert!(reals.iter().all(|&re| re == 4096));
        assert!(imags.iter().all(|&im| im == 0));
    }

    #[test]
    fn slices_are_independent_at_early_levels() {
        let twiddles = TwiddleTable::reference();
        let (mut whole_re, mut whole_im) = test_signal();
        let (mut sliced_re, mut sliced_im) = test_signal();

        fft_dit_butterflies(&mut whole_re, &mut whole_im, 0, 7, 1, &twiddles);

        let slice_len = FFT_SIZE / 4;
        sliced_re
            .chunks_exact_mut(slice_len)
            .zip(sliced_im.chunks_exact_mut(slice_len))
            .for_each(|(re, im)| fft_dit_butterflies(re, im, 0, 7, 4, &twiddles));

        assert_eq!(whole_re, sliced_re);
        assert_eq!(whole_im, sliced_im);
    }

    #[test]
    fn empty_level_range_is_a_no_op() {
        let twiddles = TwiddleTable::reference();
        let (mut reals, mut imags) = test_signal();
        let (orig_re, orig_im) = test_signal();

        fft_dit_butterflies(&mut reals, &mut imags, 5, 4, 1, &twiddles);

        assert_eq!(reals, orig_re);
        assert_eq!(imags, orig_im);
    }
}
