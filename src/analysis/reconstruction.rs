//! Reconstruction quality of a POD basis.
//!
//! Measures how well the truncated basis reproduces the snapshots and how
//! close the basis is to orthonormal.

use crate::field::{CellWeights, Field};
use crate::operators::{weighted_inner_product, weighted_norm};
use crate::pod::PodOrthoNormalBase;
use crate::types::FieldComponent;

/// Reconstruction errors of every snapshot, in the weighted norm.
#[derive(Clone, Debug)]
pub struct ReconstructionMetrics {
    /// ||s_i - Σ_k a[i][k] φ_k||_w / ||s_i||_w per snapshot
    /// (absolute error for zero-norm snapshots)
    pub relative_errors: Vec<f64>,
    /// Largest relative error
    pub max_error: f64,
    /// Root mean square of the relative errors
    pub rms_error: f64,
}

impl ReconstructionMetrics {
    /// Compare each snapshot with its reconstruction from the basis.
    ///
    /// # Panics
    ///
    /// Panics if `snapshots` is not the set the basis was built from
    /// (different count or DOF layout).
    pub fn compute<T: FieldComponent>(pod: &PodOrthoNormalBase<T>, snapshots: &[Field<T>]) -> Self {
        assert_eq!(
            snapshots.len(),
            pod.n_snapshots(),
            "Snapshot count must match the basis"
        );
        let weights = pod.weights();

        let relative_errors: Vec<f64> = snapshots
            .iter()
            .enumerate()
            .map(|(i, snapshot)| {
                let mut residual = pod.reconstruct(i);
                residual.axpy(-1.0, snapshot);
                let err = weighted_norm(&residual, weights);
                let norm = weighted_norm(snapshot, weights);
                if norm > 0.0 {
                    err / norm
                } else {
                    err
                }
            })
            .collect();

        let max_error = relative_errors.iter().copied().fold(0.0, f64::max);
        let rms_error = if relative_errors.is_empty() {
            0.0
        } else {
            (relative_errors.iter().map(|e| e * e).sum::<f64>() / relative_errors.len() as f64)
                .sqrt()
        };

        Self {
            relative_errors,
            max_error,
            rms_error,
        }
    }
}

/// Largest deviation of the basis Gram matrix from the identity:
/// `max |(φ_i, φ_k)_w - δ_ik|`.
pub fn orthonormality_error<T: FieldComponent>(basis: &[Field<T>], weights: &CellWeights) -> f64 {
    let mut max_dev: f64 = 0.0;
    for i in 0..basis.len() {
        for k in i..basis.len() {
            let ip = weighted_inner_product(&basis[i], &basis[k], weights);
            let expected = if i == k { 1.0 } else { 0.0 };
            max_dev = max_dev.max((ip - expected).abs());
        }
    }
    max_dev
}
