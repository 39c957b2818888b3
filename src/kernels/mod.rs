//! SIMD microkernels for the inner loop of matrix multiplication.
//!
//! The kernel computes a 4-lane integer dot product using SSE4.1/SSSE3
//! intrinsics. It's called by the vectorized multiply strategy after the
//! right operand has been transposed into a cache-friendly layout.
//!
//! Available kernels:
//! - `dot4`: 4-element i32 dot product, SSE4.1

#[cfg(target_arch = "x86_64")]
pub mod dot4;
