//! Criterion benchmarks for the i-j-k multiply.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dense_matmul::{Matrix, MatrixFactory, multiply};

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_ijk");
    let mut factory = MatrixFactory::with_seed(0x5eed);

    for &size in &[32usize, 64, 128, 256] {
        let a = factory.generate(size, size).expect("valid size");
        let b = factory.generate(size, size).expect("valid size");

        group.throughput(Throughput::Elements(
            Matrix::flop_count(size, size, size) as u64,
        ));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)).expect("conformant"));
        });
    }

    group.finish();
}

fn bench_rectangular(c: &mut Criterion) {
    let mut factory = MatrixFactory::with_seed(7);
    let a = factory.generate(64, 256).expect("valid size");
    let b = factory.generate(256, 32).expect("valid size");

    c.bench_function("multiply_ijk_64x256x32", |bench| {
        bench.iter(|| multiply(black_box(&a), black_box(&b)).expect("conformant"));
    });
}

criterion_group!(benches, bench_multiply, bench_rectangular);
criterion_main!(benches);
