//! Matrix multiplication strategies.
//!
//! Two interchangeable algorithms live behind the [`Multiplier`] trait:
//!
//! - [`Scalar`]: textbook triple loop, strided reads of the right operand.
//!   Slow but portable; the correctness oracle for the SIMD path.
//! - [`Vectorized`]: transposes a copy of the right operand so its columns
//!   become contiguous rows, then walks the reduction dimension in unrolled
//!   16-element SIMD chunks with 4-element and scalar remainders.
//!
//! Both produce bit-identical results, including on `i32` overflow
//! (wraparound, never a panic). Selection is a runtime choice so the two
//! paths can be tested against each other in one binary; the top-level
//! [`crate::multiply()`] picks the fastest one the CPU supports.

pub mod scalar;
pub mod vectorized;

pub use scalar::Scalar;
pub use vectorized::Vectorized;

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// A matrix multiplication algorithm.
pub trait Multiplier {
    /// Computes the product `a * b` as a new, independently owned matrix of
    /// shape `(a.rows, b.cols)`.
    ///
    /// The inputs are read-only; the right operand is copied before any
    /// internal layout change. Arithmetic is native 32-bit signed with
    /// wraparound on overflow.
    ///
    /// Precondition: `a.cols() == b.rows()`. The engine does not validate
    /// this; callers must check before invoking (the debug assertion and
    /// slice bounds turn a violation into a panic, not a defined error).
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError>;
}
