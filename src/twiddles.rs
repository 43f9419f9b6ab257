//! Q12 fixed-point twiddle factors
//!
//! A single table of cosine values covering `0..3π/2` backs both twiddle sequences the DIT
//! butterflies need. The cosine half cycle is the window `[0, N/2)` and the negative-sine half
//! cycle is the window `[N/4, 3N/4)`, since `-sin(θ) = cos(θ + π/2)`.
use std::borrow::Cow;
use std::f64::consts::PI;

use crate::kernels::common::Q12_ONE;
use crate::options::TwiddleSource;
use crate::FFT_SIZE;

/// Number of entries in the backing table, `3/4 * N`
pub const TABLE_LEN: usize = 3 * FFT_SIZE / 4;

const QUARTER_CYCLE: usize = FFT_SIZE / 4;
const HALF_CYCLE: usize = FFT_SIZE / 2;

/// Read-only twiddle factors for a `FFT_SIZE` point transform.
///
/// The table is either the reference literal, borrowed for `'static`, or computed once when the
/// plan is built. Both views returned by [`TwiddleTable::cosine_half_cycle`] and
/// [`TwiddleTable::neg_sine_half_cycle`] borrow the same storage.
#[derive(Debug, Clone)]
pub struct TwiddleTable {
    table: Cow<'static, [i16]>,
}

impl TwiddleTable {
    /// Build the table for the given source
    pub fn new(source: TwiddleSource) -> Self {
        match source {
            TwiddleSource::Reference => Self::reference(),
            TwiddleSource::Computed => Self::computed(),
        }
    }

    /// The reference literal table. Produces output comparable with other ports of the benchmark.
    pub fn reference() -> Self {
        Self {
            table: Cow::Borrowed(&COS),
        }
    }

    /// A table computed from `f64` trigonometry and rounded to Q12
    pub fn computed() -> Self {
        Self {
            table: Cow::Owned(generate_cos_table()),
        }
    }

    /// The whole backing table, cosine from `0` to `3π/2`
    pub fn as_slice(&self) -> &[i16] {
        &self.table
    }

    /// `cos(2πi/N)` for `i` in `[0, N/2)`
    pub fn cosine_half_cycle(&self) -> &[i16] {
        &self.table[..HALF_CYCLE]
    }

    /// `-sin(2πi/N)` for `i` in `[0, N/2)`
    pub fn neg_sine_half_cycle(&self) -> &[i16] {
        &self.table[QUARTER_CYCLE..QUARTER_CYCLE + HALF_CYCLE]
    }

    /// Q12 value of `cos(2πi/N)`
    ///
    /// # Panics
    ///
    /// Panics if `i >= N/2`
    #[inline]
    pub fn cosine(&self, i: usize) -> i32 {
        i32::from(self.cosine_half_cycle()[i])
    }

    /// Q12 value of `-sin(2πi/N)`
    ///
    /// # Panics
    ///
    /// Panics if `i >= N/2`
    #[inline]
    pub fn neg_sine(&self, i: usize) -> i32 {
        i32::from(self.neg_sine_half_cycle()[i])
    }
}

impl Default for TwiddleTable {
    fn default() -> Self {
        Self::reference()
    }
}

/// Compute `round(4096 * cos(2πi/N))` for `i` in `[0, 3N/4)`.
///
/// The positive end is clamped to `4095` so every entry fits the range of the reference table.
pub fn generate_cos_table() -> Vec<i16> {
    let one = f64::from(Q12_ONE);
    (0..TABLE_LEN)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / FFT_SIZE as f64;
            (one * theta.cos()).round().clamp(-one, one - 1.0) as i16
        })
        .collect()
}

// Cosine from 0 to 3π/2 in Q12
static COS: [i16; TABLE_LEN] = [
    4095, 4094, 4094, 4094, 4093, 4093, 4092, 4091, 4090, 4088, 4087, 4085, 4083, 4081, 4079, 4077,
    4075, 4072, 4070, 4067, 4064, 4061, 4057, 4054, 4050, 4046, 4042, 4038, 4034, 4030, 4025, 4021,
    4016, 4011, 4006, 4000, 3995, 3989, 3984, 3978, 3972, 3966, 3959, 3953, 3946, 3939, 3932, 3925,
    3918, 3911, 3903, 3896, 3888, 3880, 3872, 3864, 3855, 3847, 3838, 3829, 3820, 3811, 3802, 3792,
    3783, 3773, 3763, 3753, 3743, 3733, 3723, 3712, 3701, 3691, 3680, 3668, 3657, 3646, 3634, 3623,
    3611, 3599, 3587, 3575, 3563, 3550, 3537, 3525, 3512, 3499, 3486, 3473, 3459, 3446, 3432, 3418,
    3404, 3390, 3376, 3362, 3348, 3333, 3318, 3304, 3289, 3274, 3258, 3243, 3228, 3212, 3197, 3181,
    3165, 3149, 3133, 3117, 3100, 3084, 3067, 3051, 3034, 3017, 3000, 2983, 2965, 2948, 2930, 2913,
    2895, 2877, 2859, 2841, 2823, 2805, 2787, 2768, 2750, 2731, 2712, 2693, 2674, 2655, 2636, 2617,
    2597, 2578, 2558, 2539, 2519, 2499, 2479, 2459, 2439, 2419, 2398, 2378, 2357, 2337, 2316, 2295,
    2275, 2254, 2233, 2211, 2190, 2169, 2148, 2126, 2105, 2083, 2061, 2040, 2018, 1996, 1974, 1952,
    1930, 1908, 1885, 1863, 1841, 1818, 1796, 1773, 1750, 1728, 1705, 1682, 1659, 1636, 1613, 1590,
    1567, 1543, 1520, 1497, 1473, 1450, 1426, 1403, 1379, 1355, 1332, 1308, 1284, 1260, 1236, 1212,
    1188, 1164, 1140, 1116, 1092, 1067, 1043, 1019, 994, 970, 946, 921, 897, 872, 848, 823, 798,
    774, 749, 724, 700, 675, 650, 625, 600, 575, 551, 526, 501, 476, 451, 426, 401, 376, 351, 326,
    301, 276, 251, 226, 200, 175, 150, 125, 100, 75, 50, 25, 0, -25, -50, -75, -100, -125, -150,
    -175, -200, -226, -251, -276, -301, -326, -351, -376, -401, -426, -451, -476, -501, -526, -551,
    -576, -600, -625, -650, -675, -700, -724, -749, -774, -798, -823, -848, -872, -897, -921, -946,
    -970, -995, -1019, -1043, -1067, -1092, -1116, -1140, -1164, -1188, -1212, -1236, -1260, -1284,
    -1308, -1332, -1355, -1379, -1403, -1426, -1450, -1473, -1497, -1520, -1543, -1567, -1590,
    -1613, -1636, -1659, -1682, -1705, -1728, -1750, -1773, -1796, -1818, -1841, -1863, -1885,
    -1908, -1930, -1952, -1974, -1996, -2018, -2040, -2062, -2083, -2105, -2126, -2148, -2169,
    -2190, -2212, -2233, -2254, -2275, -2295, -2316, -2337, -2357, -2378, -2398, -2419, -2439,
    -2459, -2479, -2499, -2519, -2539, -2558, -2578, -2597, -2617, -2636, -2655, -2674, -2693,
    -2712, -2731, -2750, -2768, -2787, -2805, -2823, -2841, -2859, -2877, -2895, -2913, -2930,
    -2948, -2965, -2983, -3000, -3017, -3034, -3051, -3067, -3084, -3100, -3117, -3133, -3149,
    -3165, -3181, -3197, -3212, -3228, -3243, -3258, -3274, -3289, -3304, -3318, -3333, -3348,
    -3362, -3376, -3390, -3404, -3418, -3432, -3446, -3459, -3473, -3486, -3499, -3512, -3525,
    -3537, -3550, -3563, -3575, -3587, -3599, -3611, -3623, -3634, -3646, -3657, -3669, -3680,
    -3691, -3701, -3712, -3723, -3733, -3743, -3753, -3763, -3773, -3783, -3792, -3802, -3811,
    -3820, -3829, -3838, -3847, -3855, -3864, -3872, -3880, -3888, -3896, -3903, -3911, -3918,
    -3925, -3932, -3939, -3946, -3953, -3959, -3966, -3972, -3978, -3984, -3989, -3995, -4000,
    -4006, -4011, -4016, -4021, -4025, -4030, -4034, -4038, -4043, -4046, -4050, -4054, -4057,
    -4061, -4064, -4067, -4070, -4072, -4075, -4077, -4079, -4081, -4083, -4085, -4087, -4088,
    -4090, -4091, -4092, -4093, -4093, -4094, -4094, -4094, -4094, -4094, -4094, -4094, -4093,
    -4093, -4092, -4091, -4090, -4088, -4087, -4085, -4083, -4081, -4079, -4077, -4075, -4072,
    -4070, -4067, -4064, -4061, -4057, -4054, -4050, -4046, -4042, -4038, -4034, -4030, -4025,
    -4021, -4016, -4011, -4006, -4000, -3995, -3989, -3984, -3978, -3972, -3966, -3959, -3953,
    -3946, -3939, -3932, -3925, -3918, -3911, -3903, -3896, -3888, -3880, -3872, -3863, -3855,
    -3847, -3838, -3829, -3820, -3811, -3802, -3792, -3783, -3773, -3763, -3753, -3743, -3733,
    -3723, -3712, -3701, -3691, -3680, -3668, -3657, -3646, -3634, -3623, -3611, -3599, -3587,
    -3575, -3562, -3550, -3537, -3525, -3512, -3499, -3486, -3473, -3459, -3446, -3432, -3418,
    -3404, -3390, -3376, -3362, -3347, -3333, -3318, -3304, -3289, -3274, -3258, -3243, -3228,
    -3212, -3197, -3181, -3165, -3149, -3133, -3117, -3100, -3084, -3067, -3050, -3034, -3017,
    -3000, -2983, -2965, -2948, -2930, -2913, -2895, -2877, -2859, -2841, -2823, -2805, -2787,
    -2768, -2749, -2731, -2712, -2693, -2674, -2655, -2636, -2617, -2597, -2578, -2558, -2539,
    -2519, -2499, -2479, -2459, -2439, -2419, -2398, -2378, -2357, -2337, -2316, -2295, -2275,
    -2254, -2233, -2211, -2190, -2169, -2148, -2126, -2105, -2083, -2061, -2040, -2018, -1996,
    -1974, -1952, -1930, -1908, -1885, -1863, -1841, -1818, -1796, -1773, -1750, -1728, -1705,
    -1682, -1659, -1636, -1613, -1590, -1567, -1543, -1520, -1497, -1473, -1450, -1426, -1403,
    -1379, -1355, -1332, -1308, -1284, -1260, -1236, -1212, -1188, -1164, -1140, -1116, -1092,
    -1067, -1043, -1019, -994, -970, -946, -921, -897, -872, -848, -823, -798, -774, -749, -724,
    -700, -675, -650, -625, -600, -575, -551, -526, -501, -476, -451, -426, -401, -376, -351, -326,
    -301, -276, -251, -225, -200, -175, -150, -125, -100, -75, -50, -25,
];
