use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linmat::{Matrix, MatrixIndices};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_square(n: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Matrix::from_size_val(MatrixIndices::new(n, n), 0.0);
    m.for_each_entry(|entry, _| *entry = rng.random_range(-1.0..1.0));
    m
}

fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");

    for n in [4, 16, 64, 128] {
        let m = random_square(n, n as u64);
        group.bench_with_input(BenchmarkId::new("f64", n), &m, |b, m| {
            b.iter(|| black_box(m).determinant().unwrap())
        });

        group.bench_with_input(BenchmarkId::new("row_echelon_form", n), &m, |b, m| {
            b.iter(|| black_box(m).row_echelon_form().unwrap())
        });
    }

    let ints = random_square(32, 1).map(|v| (v * 10.0) as i32);
    group.bench_function(BenchmarkId::new("i32", 32), |b| {
        b.iter(|| black_box(&ints).det().unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_determinant);
criterion_main!(benches);
