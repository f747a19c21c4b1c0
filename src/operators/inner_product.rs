//! Weighted inner product between fields.
//!
//! For fields a, b over the same DOFs and weights w:
//! ```text
//! (a, b)_w = Σ_dof w[dof] · (a[dof] · b[dof])
//! ```
//! where `·` is the natural inner product of the component kind. With w
//! the cell volumes this is the discrete L2 inner product over the domain,
//! i.e. the action of a diagonal mass matrix.

use crate::field::{CellWeights, Field};
use crate::types::FieldComponent;

/// Weighted inner product of two fields.
///
/// # Panics
///
/// Panics if the fields and weights do not cover the same number of DOFs.
pub fn weighted_inner_product<T: FieldComponent>(
    a: &Field<T>,
    b: &Field<T>,
    weights: &CellWeights,
) -> f64 {
    assert_eq!(a.len(), b.len(), "Fields must have the same DOF count");
    assert_eq!(
        a.len(),
        weights.len(),
        "Weights must cover every DOF of the fields"
    );

    a.values()
        .iter()
        .zip(b.values())
        .zip(weights.as_slice())
        .map(|((x, y), &w)| w * x.inner(y))
        .sum()
}

/// Weighted norm `sqrt((a, a)_w)`.
pub fn weighted_norm<T: FieldComponent>(a: &Field<T>, weights: &CellWeights) -> f64 {
    weighted_inner_product(a, a, weights).max(0.0).sqrt()
}
