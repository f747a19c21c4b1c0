//! Orthonormal basis reconstruction (method of snapshots).
//!
//! If v_k is a unit eigenvector of the correlation matrix C with eigenvalue
//! λ_k > 0, then
//! ```text
//! φ_k = (1 / √λ_k) Σ_i v_k[i] s_i
//! ```
//! is an eigenfunction of the (much larger) DOF×DOF covariance operator,
//! with (φ_k, φ_m)_w = v_kᵀ C v_m / √(λ_k λ_m) = δ_km.

use super::eigen::EigenPairs;
use super::truncation::Truncation;
use crate::field::Field;
use crate::types::FieldComponent;

/// Build the retained basis fields, most energetic first.
///
/// # Panics
///
/// Panics if `snapshots` is empty or the eigenvectors do not have one
/// entry per snapshot.
pub fn construct_basis<T: FieldComponent>(
    snapshots: &[Field<T>],
    eigenpairs: &EigenPairs,
    truncation: &Truncation,
) -> Vec<Field<T>> {
    assert!(!snapshots.is_empty(), "Need at least one snapshot");
    assert_eq!(
        eigenpairs.vectors.nrows(),
        snapshots.len(),
        "Eigenvectors must have one entry per snapshot"
    );

    let n_dofs = snapshots[0].len();

    (0..truncation.base_size)
        .map(|k| {
            let lambda = truncation.spectrum[k];
            debug_assert!(lambda > 0.0, "Zero-energy mode {} selected", k);
            let col = truncation.order[k];
            let inv_sqrt_lambda = 1.0 / lambda.sqrt();

            let mut phi = Field::zeros(n_dofs);
            for (i, snapshot) in snapshots.iter().enumerate() {
                let c = eigenpairs.vectors[(i, col)] * inv_sqrt_lambda;
                if c != 0.0 {
                    phi.axpy(c, snapshot);
                }
            }
            phi
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::CellWeights;
    use crate::operators::{correlation_matrix, weighted_inner_product};
    use crate::pod::eigen::symmetric_eigen;
    use crate::pod::truncation::select_modes;

    fn build(snapshots: &[Field<f64>], weights: &CellWeights, accuracy: f64) -> Vec<Field<f64>> {
        let c = correlation_matrix(snapshots, weights);
        let eig = symmetric_eigen(c.as_ref()).unwrap();
        let t = select_modes(&eig.values, accuracy, 1e-12);
        construct_basis(snapshots, &eig, &t)
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let snapshots: Vec<Field<f64>> = (0..5)
            .map(|s| {
                Field::from_fn(40, |i| ((s + 1) as f64 * 0.07 * i as f64).cos() + s as f64 * 0.1)
            })
            .collect();
        let w = CellWeights::new((0..40).map(|i| 0.5 + 0.02 * i as f64).collect()).unwrap();
        let basis = build(&snapshots, &w, 0.9999);

        assert!(!basis.is_empty());
        for i in 0..basis.len() {
            for k in 0..basis.len() {
                let ip = weighted_inner_product(&basis[i], &basis[k], &w);
                let expected = if i == k { 1.0 } else { 0.0 };
                assert!(
                    (ip - expected).abs() < 1e-8,
                    "(phi_{}, phi_{}) = {}, expected {}",
                    i,
                    k,
                    ip,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_single_snapshot_basis_is_normalized_snapshot() {
        let s = Field::new(vec![3.0, 0.0, 4.0]);
        let w = CellWeights::uniform(3);
        let basis = build(std::slice::from_ref(&s), &w, 1.0);

        assert_eq!(basis.len(), 1);
        // Eigenvector sign is arbitrary
        let sign = basis[0][0].signum();
        for dof in 0..3 {
            assert!((sign * basis[0][dof] - s[dof] / 5.0).abs() < 1e-12);
        }
    }
}
