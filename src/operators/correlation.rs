//! Snapshot correlation (Gram) matrix.
//!
//! For N snapshots s_0..s_{N-1}:
//! ```text
//! C[i][j] = (s_i, s_j)_w
//! ```
//! C is symmetric positive semi-definite. Only the upper triangle including
//! the diagonal is evaluated; the lower triangle is mirrored. Cost is
//! O(N² · n_dofs), the dominant cost of the POD for large meshes.

use faer::Mat;

use super::weighted_inner_product;
use crate::field::{CellWeights, Field};
use crate::types::FieldComponent;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Build the N×N correlation matrix of the snapshots.
pub fn correlation_matrix<T: FieldComponent>(
    snapshots: &[Field<T>],
    weights: &CellWeights,
) -> Mat<f64> {
    let n = snapshots.len();
    let mut c = Mat::zeros(n, n);

    for i in 0..n {
        for j in i..n {
            let cij = weighted_inner_product(&snapshots[i], &snapshots[j], weights);
            c[(i, j)] = cij;
            c[(j, i)] = cij;
        }
    }

    c
}

/// Build the correlation matrix in parallel using rayon.
///
/// Each task evaluates one row of the upper triangle, so tasks write
/// disjoint entries. Produces exactly the same matrix as
/// [`correlation_matrix`]. Enable with the `parallel` feature.
#[cfg(feature = "parallel")]
pub fn correlation_matrix_parallel<T: FieldComponent>(
    snapshots: &[Field<T>],
    weights: &CellWeights,
) -> Mat<f64> {
    let n = snapshots.len();

    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            (i..n)
                .map(|j| weighted_inner_product(&snapshots[i], &snapshots[j], weights))
                .collect()
        })
        .collect();

    let mut c = Mat::zeros(n, n);
    for (i, row) in rows.iter().enumerate() {
        for (offset, &cij) in row.iter().enumerate() {
            let j = i + offset;
            c[(i, j)] = cij;
            c[(j, i)] = cij;
        }
    }

    c
}
