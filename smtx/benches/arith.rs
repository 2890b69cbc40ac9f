//! Benchmarks for sparse matrix arithmetic

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smtx::{add, multiply, SparseMatrix};
use std::hint::black_box;

/// Populate a matrix with roughly `nnz` random non-zero entries
fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, nnz: usize) -> SparseMatrix {
    let mut matrix = SparseMatrix::new(rows, cols);
    while matrix.nnz() < nnz {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        let value = rng.gen_range(1..=1000);
        matrix.set(row, col, value).unwrap();
    }
    matrix
}

fn bench_add(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_matrix(&mut rng, 1000, 1000, 5000);
    let b = random_matrix(&mut rng, 1000, 1000, 5000);

    c.bench_function("add 1000x1000 nnz=5000", |bencher| {
        bencher.iter(|| add(black_box(&a), black_box(&b)).unwrap())
    });
}

fn bench_multiply(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_matrix(&mut rng, 200, 200, 2000);
    let b = random_matrix(&mut rng, 200, 200, 2000);

    c.bench_function("multiply 200x200 nnz=2000", |bencher| {
        bencher.iter(|| multiply(black_box(&a), black_box(&b)).unwrap())
    });
}

criterion_group!(benches, bench_add, bench_multiply);
criterion_main!(benches);
