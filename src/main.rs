//! Demo driver: loads or generates two matrices, multiplies them with both
//! strategies, and reports timings.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use intmatmul::matrix::Matrix;
use intmatmul::multiply::{Multiplier, Scalar, Vectorized};
use intmatmul::{MatrixError, load_from_text};

/// Default operand size when no input files are given.
#[cfg(debug_assertions)]
const DIM: usize = 4;
#[cfg(not(debug_assertions))]
const DIM: usize = 1024;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let (a, b) = match load_operands(&args) {
        Ok(operands) => operands,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if a.cols() != b.rows() {
        eprintln!(
            "Cannot perform matrix multiplication: incompatible dimensions {}x{} * {}x{}.",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        );
        return ExitCode::FAILURE;
    }

    let start = Instant::now();
    let c_scalar = Scalar.multiply(&a, &b);
    let scalar_time = start.elapsed();

    let start = Instant::now();
    let c_simd = Vectorized.multiply(&a, &b);
    let simd_time = start.elapsed();

    let c = match (c_scalar, c_simd) {
        (Ok(c_scalar), Ok(c)) => {
            debug_assert_eq!(c_scalar, c);
            c
        }
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if cfg!(debug_assertions) {
        a.print(Some("A"));
        println!();
        b.print(Some("B"));
        println!();
        c.print(Some("C"));
        println!();
    }

    let ops = 2 * a.rows() * a.cols() * b.cols();
    println!(
        "scalar     {:8.2} ms  {:6.2} GOPS",
        scalar_time.as_secs_f64() * 1000.0,
        ops as f64 / scalar_time.as_secs_f64() / 1e9
    );
    println!(
        "vectorized {:8.2} ms  {:6.2} GOPS  ({:.1}×)",
        simd_time.as_secs_f64() * 1000.0,
        ops as f64 / simd_time.as_secs_f64() / 1e9,
        scalar_time.as_secs_f64() / simd_time.as_secs_f64()
    );

    ExitCode::SUCCESS
}

/// Operand selection mirrors the argument count: none generates two random
/// matrices, one loads the same file twice, two loads both files.
fn load_operands(args: &[String]) -> Result<(Matrix, Matrix), MatrixError> {
    match args {
        [] => Ok((Matrix::random(DIM, DIM)?, Matrix::random(DIM, DIM)?)),
        [path] => Ok((load_from_text(path)?, load_from_text(path)?)),
        [a_path, b_path, ..] => Ok((load_from_text(a_path)?, load_from_text(b_path)?)),
    }
}
