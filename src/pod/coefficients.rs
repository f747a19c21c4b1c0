//! Projection of fields onto the POD basis.
//!
//! The interpolation coefficients of snapshot i are its weighted inner
//! products with the basis fields:
//! ```text
//! a[i][k] = (s_i, φ_k)_w,    s_i ≈ Σ_k a[i][k] φ_k
//! ```
//! The approximation is exact when no energetic mode was truncated.

use faer::Mat;

use crate::field::{CellWeights, Field};
use crate::operators::weighted_inner_product;
use crate::types::FieldComponent;

/// N×K matrix of snapshot coefficients (snapshots × modes).
pub fn project_snapshots<T: FieldComponent>(
    snapshots: &[Field<T>],
    basis: &[Field<T>],
    weights: &CellWeights,
) -> Mat<f64> {
    Mat::from_fn(snapshots.len(), basis.len(), |i, k| {
        weighted_inner_product(&snapshots[i], &basis[k], weights)
    })
}

/// Coefficients of a single field, one per basis mode.
pub fn project_field<T: FieldComponent>(
    field: &Field<T>,
    basis: &[Field<T>],
    weights: &CellWeights,
) -> Vec<f64> {
    basis
        .iter()
        .map(|phi| weighted_inner_product(field, phi, weights))
        .collect()
}

/// Linear combination Σ_k coefficients[k] φ_k.
///
/// # Panics
///
/// Panics if `coefficients` and `basis` differ in length.
pub fn expand<T: FieldComponent>(
    coefficients: &[f64],
    basis: &[Field<T>],
    n_dofs: usize,
) -> Field<T> {
    assert_eq!(
        coefficients.len(),
        basis.len(),
        "One coefficient per basis mode required"
    );
    let mut out = Field::zeros(n_dofs);
    for (&a, phi) in coefficients.iter().zip(basis) {
        out.axpy(a, phi);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_basis() -> Vec<Field<f64>> {
        vec![
            Field::new(vec![1.0, 0.0, 0.0]),
            Field::new(vec![0.0, 1.0, 0.0]),
        ]
    }

    #[test]
    fn test_projection_shape_and_values() {
        let snapshots = vec![
            Field::new(vec![2.0, 3.0, 4.0]),
            Field::new(vec![-1.0, 0.5, 0.0]),
        ];
        let coeffs = project_snapshots(&snapshots, &unit_basis(), &CellWeights::uniform(3));

        assert_eq!(coeffs.nrows(), 2);
        assert_eq!(coeffs.ncols(), 2);
        assert_eq!(coeffs[(0, 0)], 2.0);
        assert_eq!(coeffs[(0, 1)], 3.0);
        assert_eq!(coeffs[(1, 0)], -1.0);
        assert_eq!(coeffs[(1, 1)], 0.5);
    }

    #[test]
    fn test_expand_drops_truncated_component() {
        let basis = unit_basis();
        let w = CellWeights::uniform(3);
        let field = Field::new(vec![2.0, 3.0, 4.0]);

        let a = project_field(&field, &basis, &w);
        let approx = expand(&a, &basis, 3);
        assert_eq!(approx.values(), &[2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_empty_basis() {
        let snapshots = vec![Field::new(vec![0.0, 0.0])];
        let coeffs = project_snapshots::<f64>(&snapshots, &[], &CellWeights::uniform(2));
        assert_eq!(coeffs.nrows(), 1);
        assert_eq!(coeffs.ncols(), 0);
        assert_eq!(expand::<f64>(&[], &[], 2).values(), &[0.0, 0.0]);
    }
}
