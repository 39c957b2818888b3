//! Criterion benchmark comparing the scalar and vectorized strategies.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use intmatmul::matrix::Matrix;
use intmatmul::multiply::{Multiplier, Scalar, Vectorized};

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for size in [64, 256, 512] {
        let mut rng = StdRng::seed_from_u64(42);
        let a = Matrix::random_from(&mut rng, size, size).expect("alloc");
        let b = Matrix::random_from(&mut rng, size, size).expect("alloc");

        // 2*n^3 multiply-adds per product.
        group.throughput(Throughput::Elements(2 * (size as u64).pow(3)));

        group.bench_with_input(BenchmarkId::new("scalar", size), &size, |bench, _| {
            bench.iter(|| Scalar.multiply(black_box(&a), black_box(&b)).expect("alloc"));
        });
        group.bench_with_input(BenchmarkId::new("vectorized", size), &size, |bench, _| {
            bench.iter(|| {
                Vectorized
                    .multiply(black_box(&a), black_box(&b))
                    .expect("alloc")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
