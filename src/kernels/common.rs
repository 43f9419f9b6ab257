//! Q12 fixed-point arithmetic shared by the butterfly kernels
//!
//! Samples and twiddle factors are plain `i32`. Twiddles carry 12 fractional bits, so a product
//! of a sample and a twiddle is rescaled with an arithmetic right shift by [`Q12_SHIFT`].
//!
//! Overflow is a defect, not a recoverable condition. Debug and test builds trap on it through
//! Rust's overflow checks; the benchmark input stays within `i32` at every stage.

/// Fractional bits of a twiddle factor
pub const Q12_SHIFT: u32 = 12;

/// `1.0` in Q12
pub const Q12_ONE: i32 = 1 << Q12_SHIFT;

/// Multiply the complex sample `(a, b)` by the Q12 twiddle `(c, d)`.
///
/// Uses three multiplies instead of four:
/// `k1 = a(c + d)`, `k2 = d(a + b)`, `k3 = c(b - a)`, giving
/// `re = k1 - k2 = ac - bd` and `im = k1 + k3 = ad + bc`.
/// Each partial product is shifted back to the sample scale before combining, so results match
/// the reference benchmark bit for bit.
#[inline(always)]
pub fn mul_q12(a: i32, b: i32, c: i32, d: i32) -> (i32, i32) {
    let k1 = (a * (c + d)) >> Q12_SHIFT;
    let k2 = (d * (a + b)) >> Q12_SHIFT;
    let k3 = (c * (b - a)) >> Q12_SHIFT;
    (k1 - k2, k1 + k3)
}

/// Radix-2 butterfly on one pair of samples, in place.
///
/// `(x0, y0)` becomes `X0 + T` and `(x1, y1)` becomes `X0 - T` where `T = X1 * W`.
#[inline(always)]
pub fn butterfly_q12(x0: &mut i32, y0: &mut i32, x1: &mut i32, y1: &mut i32, c: i32, d: i32) {
    let (tx, ty) = mul_q12(*x1, *y1, c, d);

    let k1 = *x0;
    let k2 = *y0;
    *x1 = k1 - tx;
    *y1 = k2 - ty;
    *x0 = k1 + tx;
    *y0 = k2 + ty;
}
