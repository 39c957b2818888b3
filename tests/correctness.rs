use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use intmatmul::matrix::Matrix;
use intmatmul::multiply;
use intmatmul::multiply::{Multiplier, Scalar, Vectorized};

fn assert_matrices_equal(expected: &Matrix, actual: &Matrix, name: &str) {
    assert_eq!(expected.rows(), actual.rows(), "{}: row mismatch", name);
    assert_eq!(expected.cols(), actual.cols(), "{}: col mismatch", name);
    for i in 0..expected.as_slice().len() {
        assert_eq!(
            expected.as_slice()[i],
            actual.as_slice()[i],
            "{}: mismatch at index {}",
            name,
            i
        );
    }
}

fn matrix_from_flat(rows: usize, cols: usize, values: &[i32]) -> Matrix {
    let mut m = Matrix::zeros(rows, cols).expect("alloc");
    m.as_mut_slice().copy_from_slice(values);
    m
}

// ============================================================
// Small matrix tests (concrete results)
// ============================================================

#[test]
fn test_2x2_multiply() {
    let a = Matrix::from_rows(&[[1, 2], [3, 4]]).expect("alloc");
    let b = Matrix::from_rows(&[[5, 6], [7, 8]]).expect("alloc");

    let c_scalar = Scalar.multiply(&a, &b).expect("alloc");
    let c_simd = Vectorized.multiply(&a, &b).expect("alloc");

    assert_eq!(c_scalar.as_slice(), &[19, 22, 43, 50]);
    assert_matrices_equal(&c_scalar, &c_simd, "2x2");
}

#[test]
fn test_2x3_times_3x2() {
    let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).expect("alloc");
    let b = Matrix::from_rows(&[[7, 8], [9, 10], [11, 12]]).expect("alloc");

    let c_scalar = Scalar.multiply(&a, &b).expect("alloc");
    let c_simd = Vectorized.multiply(&a, &b).expect("alloc");

    assert_eq!(c_scalar.as_slice(), &[58, 64, 139, 154]);
    assert_matrices_equal(&c_scalar, &c_simd, "2x3 * 3x2");
}

#[test]
fn test_auto_dispatch_matches_scalar() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = Matrix::random_from(&mut rng, 9, 21).expect("alloc");
    let b = Matrix::random_from(&mut rng, 21, 5).expect("alloc");

    let c_scalar = Scalar.multiply(&a, &b).expect("alloc");
    let c_auto = multiply(&a, &b).expect("alloc");

    assert_matrices_equal(&c_scalar, &c_auto, "auto dispatch");
}

// ============================================================
// Shape and identity properties
// ============================================================

#[test]
fn test_result_shape() {
    let test_cases = [(1, 1, 1), (2, 3, 4), (7, 5, 3), (16, 16, 1)];

    for (m, k, n) in test_cases {
        let a = Matrix::zeros(m, k).expect("alloc");
        let b = Matrix::zeros(k, n).expect("alloc");

        let c = multiply(&a, &b).expect("alloc");

        assert_eq!(c.rows(), m, "{}x{}x{}", m, k, n);
        assert_eq!(c.cols(), n, "{}x{}x{}", m, k, n);
    }
}

#[test]
fn test_identity() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = Matrix::random_from(&mut rng, 6, 6).expect("alloc");
    let id = Matrix::identity(6).expect("alloc");

    assert_eq!(multiply(&a, &id).expect("alloc"), a);
    assert_eq!(multiply(&id, &a).expect("alloc"), a);
}

#[test]
fn test_identity_non_square_operand() {
    let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).expect("alloc");
    let id = Matrix::identity(3).expect("alloc");

    assert_eq!(multiply(&a, &id).expect("alloc"), a);
}

// ============================================================
// Reduction-dimension boundaries
// ============================================================

// k = 1 and 3 hit only the scalar tail, 4 and 5 bring in the 4-wide pass,
// 15 stops just short of the unrolled pass, 16 and 17 exercise it.
#[test]
fn test_reduction_boundaries() {
    let test_dims = [1, 3, 4, 5, 15, 16, 17];

    for k in test_dims {
        let a_vals: Vec<i32> = (0..3 * k).map(|i| (i % 10) as i32 - 4).collect();
        let b_vals: Vec<i32> = (0..k * 3).map(|i| (i % 7) as i32 - 3).collect();

        let a = matrix_from_flat(3, k, &a_vals);
        let b = matrix_from_flat(k, 3, &b_vals);

        let c_scalar = Scalar.multiply(&a, &b).expect("alloc");
        let c_simd = Vectorized.multiply(&a, &b).expect("alloc");

        assert_matrices_equal(&c_scalar, &c_simd, &format!("k={}", k));
    }
}

#[test]
fn test_non_square_matrices() {
    let test_cases = [
        (32, 48, 64),  // wide result
        (64, 48, 32),  // tall result
        (100, 75, 50), // odd sizes
        (48, 100, 48), // deep k
        (13, 19, 17),  // primes
    ];

    for (m, k, n) in test_cases {
        let mut rng = StdRng::seed_from_u64((m * k * n) as u64);
        let a = Matrix::random_from(&mut rng, m, k).expect("alloc");
        let b = Matrix::random_from(&mut rng, k, n).expect("alloc");

        let c_scalar = Scalar.multiply(&a, &b).expect("alloc");
        let c_simd = Vectorized.multiply(&a, &b).expect("alloc");

        assert_matrices_equal(&c_scalar, &c_simd, &format!("{}x{}x{}", m, k, n));
    }
}

// ============================================================
// Overflow behavior
// ============================================================

#[test]
fn test_overflow_wraps() {
    // i32::MAX * 2 wraps to -2; adding 2 * 1 lands on exactly 0.
    let a = Matrix::from_rows(&[[i32::MAX, 2]]).expect("alloc");
    let b = Matrix::from_rows(&[[2], [1]]).expect("alloc");

    let c_scalar = Scalar.multiply(&a, &b).expect("alloc");
    let c_simd = Vectorized.multiply(&a, &b).expect("alloc");

    assert_eq!(c_scalar.as_slice(), &[0]);
    assert_matrices_equal(&c_scalar, &c_simd, "overflow 1x2");
}

#[test]
fn test_overflow_wraps_across_all_passes() {
    // Large magnitudes through the 16-wide, 4-wide, and scalar passes; both
    // strategies must wrap to the same values, not crash.
    let k = 19;
    let a_vals: Vec<i32> = (0..2 * k)
        .map(|i| i32::MAX - (i % 5) as i32 * 100_000)
        .collect();
    let b_vals: Vec<i32> = (0..k * 2)
        .map(|i| i32::MIN + (i % 3) as i32 * 77_777)
        .collect();

    let a = matrix_from_flat(2, k, &a_vals);
    let b = matrix_from_flat(k, 2, &b_vals);

    let c_scalar = Scalar.multiply(&a, &b).expect("alloc");
    let c_simd = Vectorized.multiply(&a, &b).expect("alloc");

    assert_matrices_equal(&c_scalar, &c_simd, "overflow all passes");
}

// ============================================================
// Property: scalar and vectorized agree on arbitrary inputs
// ============================================================

proptest! {
    #[test]
    fn prop_scalar_and_vectorized_agree(
        (m, k, n, a_vals, b_vals) in (1usize..8, 1usize..24, 1usize..8).prop_flat_map(|(m, k, n)| {
            (
                Just(m),
                Just(k),
                Just(n),
                proptest::collection::vec(any::<i32>(), m * k),
                proptest::collection::vec(any::<i32>(), k * n),
            )
        })
    ) {
        let a = matrix_from_flat(m, k, &a_vals);
        let b = matrix_from_flat(k, n, &b_vals);

        let c_scalar = Scalar.multiply(&a, &b).expect("alloc");
        let c_simd = Vectorized.multiply(&a, &b).expect("alloc");

        prop_assert_eq!(c_scalar.as_slice(), c_simd.as_slice());
    }
}
