use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linmat::{Matrix, MatrixIndices, Vector};

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");

    for n in [16, 128, 512] {
        let size = MatrixIndices::new(n, n);
        let a = Matrix::from_size_val(size, 1.0f32);
        let b = Matrix::from_size_val(size, 2.0f32);

        group.bench_with_input(BenchmarkId::new("add", n), &n, |bench, _| {
            bench.iter(|| (black_box(&a) + black_box(&b)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("scalar_mul", n), &n, |bench, _| {
            bench.iter(|| black_box(&a) * 3.0)
        });

        group.bench_with_input(BenchmarkId::new("transposed", n), &n, |bench, _| {
            bench.iter(|| black_box(&a).transposed())
        });
    }

    group.finish();
}

fn bench_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("products");

    for n in [16, 64, 128] {
        let size = MatrixIndices::new(n, n);
        let mut a = Matrix::from_size_val(size, 0.0f64);
        a.for_each_entry(|entry, pos| *entry = (pos.x() + pos.y()) as f64);
        let b = a.transposed();
        let v = Vector::from_size_val(n, 0.5f64);

        group.bench_with_input(BenchmarkId::new("matrix", n), &n, |bench, _| {
            bench.iter(|| (black_box(&a) * black_box(&b)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("matrix_vector", n), &n, |bench, _| {
            bench.iter(|| (black_box(&a) * black_box(&v)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_elementwise, bench_products);
criterion_main!(benches);
