//! FFT Algorithm Implementations
//!
//! ## Available Algorithms
//!
//! - **Bit reversal**: the in-place permutation that puts the input in time-decimated order.
//!
//! - **DIT (Decimation-in-Time)**: processes data from small butterflies to large. Input is
//!   bit-reversed, output is in natural order. Early levels are split across independent slices
//!   of the buffer; later levels run with fewer slices until one slice covers the whole buffer.

pub mod bit_reversal;
pub mod dit;
