//! Pairwise matrix benchmarks
//!
//! Both matrices evaluate N·(N+1)/2 (NCD) or N·(N-1)/2 (Hamming) pairs and
//! deal rows to scoped worker threads. Comparing one thread against all
//! cores shows how well the row split balances.
//!
//! # Run Instructions
//!
//! ```bash
//! cargo bench --bench pairwise_matrix
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spikeplex::hamming::pairwise_matrix;
use spikeplex::ncd::{ncd_matrix, Compressor, NcdLayout};
use spikeplex::synthetic::bernoulli_trains;

fn bench_hamming_matrix(c: &mut Criterion) {
    let trains = bernoulli_trains(32, 256, 0.2, 10).unwrap();
    let mut group = c.benchmark_group("hamming_matrix_32x256");
    group.sample_size(20);
    for threads in [1, 0] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| pairwise_matrix(black_box(&trains), threads).unwrap());
        });
    }
    group.finish();
}

fn bench_ncd_matrix(c: &mut Criterion) {
    let trains = bernoulli_trains(24, 512, 0.3, 11).unwrap();
    let mut group = c.benchmark_group("ncd_matrix_24x512");
    group.sample_size(10);
    for name in ["lz", "gzip", "zstd", "ppm"] {
        let compressor: Compressor = name.parse().unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                ncd_matrix(black_box(&trains), &compressor, NcdLayout::Symmetric, 0).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hamming_matrix, bench_ncd_matrix);
criterion_main!(benches);
