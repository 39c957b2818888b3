//! 4-lane SSE4.1 dot-product microkernel.

/// Computes the dot product of two 4-element `i32` vectors.
///
/// Loads both operands into 128-bit registers, multiplies the four lane
/// pairs, then folds the products with two horizontal additions and returns
/// the low lane. All arithmetic is two's-complement wraparound, so the
/// result is bit-identical to four scalar `wrapping_mul`/`wrapping_add`
/// steps in any summation order.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports SSE4.1 and SSSE3 (checked via `#[target_feature]`)
/// - `a` and `b` each point to 4 readable consecutive `i32` values
#[target_feature(enable = "sse4.1,ssse3")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn dot4_sse41(a: *const i32, b: *const i32) -> i32 {
    use std::arch::x86_64::*;

    let va = _mm_loadu_si128(a.cast::<__m128i>());
    let vb = _mm_loadu_si128(b.cast::<__m128i>());

    // Pairwise products, low 32 bits (wraparound semantics).
    let products = _mm_mullo_epi32(va, vb);

    // Two horizontal adds collapse the 4 lanes into every lane.
    let sum = _mm_hadd_epi32(products, products);
    let sum = _mm_hadd_epi32(sum, sum);

    _mm_cvtsi128_si32(sum)
}
