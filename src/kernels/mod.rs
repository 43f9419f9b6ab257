//! Fixed-Point FFT Butterfly Kernels
//!
//! ## Organization
//!
//! - `common`: Q12 complex multiply and the single radix-2 butterfly
//! - `dit`: Decimation-in-Time butterfly levels over one slice of the buffers

pub mod common;
pub mod dit;
