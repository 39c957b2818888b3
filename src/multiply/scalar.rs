//! Naive triple-loop multiplication.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::multiply::Multiplier;

/// The textbook i-j-k triple loop.
///
/// The innermost loop reads `b` with stride `n` (column-wise), causing cache
/// misses on every iteration for large right operands. Use it as the
/// portable baseline and as the oracle the vectorized path is tested
/// against, not for performance.
pub struct Scalar;

impl Multiplier for Scalar {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        debug_assert_eq!(a.cols(), b.rows(), "operand dimensions must agree");

        let (m, k, n) = (a.rows(), a.cols(), b.cols());
        let mut c = Matrix::zeros(m, n)?;

        let av = a.as_slice();
        let bv = b.as_slice();
        let cv = c.as_mut_slice();

        for i in 0..m {
            for j in 0..n {
                let mut acc: i32 = 0;
                for p in 0..k {
                    acc = acc.wrapping_add(av[i * k + p].wrapping_mul(bv[p * n + j]));
                }
                cv[i * n + j] = acc;
            }
        }

        Ok(c)
    }
}
