//! Transpose-then-blocked SIMD multiplication.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::multiply::{Multiplier, Scalar};

/// SIMD dot-product multiplication over a transposed copy of `b`.
///
/// Step 1 copies and transposes the right operand so what was column `j`
/// becomes a contiguous row: a one-time O(k·n) cost that turns the strided
/// inner-loop reads of the naive algorithm into sequential ones. Step 2
/// walks the reduction dimension per output cell in three passes: unrolled
/// 16-element chunks of four SSE4.1 dot products, then 4-element chunks,
/// then a scalar tail for the last 0–3 elements.
///
/// On a CPU without SSE4.1/SSSE3 (or off x86_64) this falls back to
/// [`Scalar`]; the results are bit-identical either way.
pub struct Vectorized;

impl Multiplier for Vectorized {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        debug_assert_eq!(a.cols(), b.rows(), "operand dimensions must agree");

        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("sse4.1") && is_x86_feature_detected!("ssse3") {
                return unsafe { multiply_sse41(a, b) };
            }
        }

        Scalar.multiply(a, b)
    }
}

/// The SSE4.1 multiply proper.
///
/// # Safety
///
/// Caller must ensure CPU supports SSE4.1 and SSSE3.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse4.1,ssse3")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn multiply_sse41(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    use crate::kernels::dot4::dot4_sse41;
    use crate::matrix::transpose::transposed_copy;

    let (m, k, n) = (a.rows(), a.cols(), b.cols());

    // Transposed copy of b; the caller's matrix is never touched. Row j of
    // bt is column j of b, so both kernel operands stream sequentially.
    let bt = transposed_copy(b)?;
    let mut c = Matrix::zeros(m, n)?;

    let av = a.as_slice();
    let btv = bt.as_slice();
    let cv = c.as_mut_slice();

    for i in 0..m {
        let row = av[i * k..(i + 1) * k].as_ptr();
        for j in 0..n {
            let col = btv[j * k..(j + 1) * k].as_ptr();
            let mut acc: i32 = 0;
            let mut p = 0;

            // 16-element chunks: four dot products per iteration.
            while p + 16 <= k {
                acc = acc.wrapping_add(dot4_sse41(row.add(p), col.add(p)));
                acc = acc.wrapping_add(dot4_sse41(row.add(p + 4), col.add(p + 4)));
                acc = acc.wrapping_add(dot4_sse41(row.add(p + 8), col.add(p + 8)));
                acc = acc.wrapping_add(dot4_sse41(row.add(p + 12), col.add(p + 12)));
                p += 16;
            }

            // Remainder in 4-element chunks.
            while p + 4 <= k {
                acc = acc.wrapping_add(dot4_sse41(row.add(p), col.add(p)));
                p += 4;
            }

            // Last 0-3 elements one at a time.
            while p < k {
                acc = acc.wrapping_add(av[i * k + p].wrapping_mul(btv[j * k + p]));
                p += 1;
            }

            cv[i * n + j] = acc;
        }
    }

    Ok(c)
}
