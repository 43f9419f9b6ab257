//! Integer helpers used by the spectrum report

use num_traits::PrimInt;

/// Integer square root, `floor(sqrt(v))`.
///
/// Digit-by-digit binary method with no floating point: a one bit starts at the highest even
/// bit position of `T` and walks down two bits per step, restoring the remainder whenever the
/// trial subtraction would go negative. No intermediate exceeds `v`, so the full non-negative
/// range of `T` is supported.
///
/// # Panics
///
/// Panics if `v` is negative
pub fn isqrt<T: PrimInt>(v: T) -> T {
    assert!(v >= T::zero(), "square root of a negative number");

    let bits = T::zero().count_zeros() as usize;
    let mut bit = T::one() << (bits - 2);
    let mut rem = v;
    let mut res = T::zero();

    while bit > v {
        bit = bit >> 2;
    }

    while bit != T::zero() {
        if rem >= res + bit {
            rem = rem - (res + bit);
            res = (res >> 1) + bit;
        } else {
            res = res >> 1;
        }
        bit = bit >> 2;
    }

    res
}
