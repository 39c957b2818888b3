//! Dense integer matrix multiplication in Rust, with SIMD and a streaming
//! text loader.
//!
//! I built this around one idea: the naive triple loop is slow because it
//! reads the right operand column-wise. Transpose a copy of it once, and the
//! inner loop becomes two sequential streams you can feed straight into a
//! 4-lane SSE4.1 dot product. Everything is `i32` with wraparound semantics,
//! and the scalar and SIMD paths produce bit-identical results.
//!
//! ## Usage
//!
//! ```
//! use intmatmul::{multiply, Matrix};
//!
//! let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
//! let b = Matrix::from_rows(&[[5, 6], [7, 8]]).unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
//! ```
//!
//! Matrices also come from plain text files, streamed through a fixed-size
//! buffer rather than read whole:
//!
//! ```no_run
//! let m = intmatmul::load_from_text("operand.txt").unwrap();
//! ```
//!
//! ## What's inside
//!
//! - 4-lane SSE4.1 integer dot-product kernel with 16-element unrolling
//! - Row/column transposition for cache-friendly sequential reads
//! - 16-byte-aligned owned buffers with paired allocation/release
//! - A permissive streaming integer parser for text input

pub mod error;
pub mod kernels;
pub mod loader;
pub mod matrix;
pub mod multiply;

pub use error::MatrixError;
pub use loader::load_from_text;
pub use matrix::Matrix;
pub use multiply::{Multiplier, Scalar, Vectorized};

/// Matrix multiply: returns `a * b` as a new matrix.
///
/// Picks the fastest strategy available at runtime (SSE4.1 > scalar).
/// Matrices are row-major: `a` is m×k, `b` is k×n, the result is m×n.
///
/// Precondition: `a.cols() == b.rows()`; callers must check dimensions
/// themselves before multiplying, as the engine does not (see
/// [`Multiplier::multiply`]).
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("sse4.1") && is_x86_feature_detected!("ssse3") {
            return Vectorized.multiply(a, b);
        }
    }

    Scalar.multiply(a, b)
}
