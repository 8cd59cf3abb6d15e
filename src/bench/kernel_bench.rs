//! Criterion comparison of the three CPU kernels.
//!
//! The `time-naive` binary is the one-shot measurement the exercise asks
//! for; this bench exists for sanity-checking the kernels against each
//! other with proper warmup and sampling.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use matmul_lab::matrix::{matmul_naive_ijk, matmul_naive_ikj, matmul_unrolled, random_square};

fn bench_kernels(c: &mut Criterion) {
    for n in [64, 128, 256] {
        let a = random_square(n);
        let b = random_square(n);

        let mut group = c.benchmark_group(format!("matmul_{}x{}", n, n));

        group.bench_function("naive_ijk", |bencher| {
            bencher.iter(|| {
                let mut out = vec![0.0f64; n * n];
                matmul_naive_ijk(black_box(&a), black_box(&b), &mut out, n);
                out
            })
        });

        group.bench_function("naive_ikj", |bencher| {
            bencher.iter(|| {
                let mut out = vec![0.0f64; n * n];
                matmul_naive_ikj(black_box(&a), black_box(&b), &mut out, n);
                out
            })
        });

        group.bench_function("unrolled", |bencher| {
            bencher.iter(|| {
                let mut out = vec![0.0f64; n * n];
                matmul_unrolled(black_box(&a), black_box(&b), &mut out, n);
                out
            })
        });

        group.finish();
    }
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
