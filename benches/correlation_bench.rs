//! Benchmarks for correlation matrix assembly.
//!
//! Run with: `cargo bench --bench correlation_bench`
//! Add `--features parallel` to include the rayon variant.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pod_rs::mesh::Grid2D;
use pod_rs::{correlation_matrix, CellWeights, Field, WeightProvider};

/// Oscillatory snapshots on an n × n grid.
fn setup_problem(n: usize, n_snapshots: usize) -> (Vec<Field<f64>>, CellWeights) {
    let grid = Grid2D::uniform_rectangle(0.0, 1.0, 0.0, 1.0, n, n);
    let weights = grid.cell_weights().expect("uniform grid has valid weights");

    let snapshots = (0..n_snapshots)
        .map(|s| {
            let t = s as f64 * 0.05;
            Field::from_fn(grid.n_cells(), |k| {
                let (x, y) = grid.cell_center(k);
                (6.0 * x - t).sin() * (4.0 * y + t).cos()
            })
        })
        .collect();

    (snapshots, weights)
}

/// Benchmark serial assembly.
fn bench_correlation_serial(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation_serial");

    for n in [32, 64, 128] {
        let (snapshots, weights) = setup_problem(n, 40);

        group.bench_with_input(
            BenchmarkId::new("snapshots_40", format!("{}_cells", n * n)),
            &n,
            |b, _| {
                b.iter(|| correlation_matrix(black_box(&snapshots), black_box(&weights)));
            },
        );
    }

    group.finish();
}

/// Benchmark rayon assembly.
#[cfg(feature = "parallel")]
fn bench_correlation_parallel(c: &mut Criterion) {
    use pod_rs::correlation_matrix_parallel;

    let mut group = c.benchmark_group("correlation_parallel");

    for n in [32, 64, 128] {
        let (snapshots, weights) = setup_problem(n, 40);

        group.bench_with_input(
            BenchmarkId::new("snapshots_40", format!("{}_cells", n * n)),
            &n,
            |b, _| {
                b.iter(|| correlation_matrix_parallel(black_box(&snapshots), black_box(&weights)));
            },
        );
    }

    group.finish();
}

#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_correlation_serial);
#[cfg(feature = "parallel")]
criterion_group!(benches, bench_correlation_serial, bench_correlation_parallel);
criterion_main!(benches);
