//! Symmetric eigen-decomposition of the correlation matrix.
//!
//! Delegates to faer's self-adjoint eigensolver and converts its result
//! into owned eigenpairs. Ordering is whatever the solver returns; ranking
//! by energy is done by the truncation step.

use faer::{Mat, MatRef, Side};

use super::PodError;

/// Eigenpairs of a symmetric matrix.
///
/// Column j of `vectors` is the unit eigenvector for `values[j]`.
#[derive(Clone, Debug)]
pub struct EigenPairs {
    /// Real eigenvalues
    pub values: Vec<f64>,
    /// Eigenvectors stored column-wise
    pub vectors: Mat<f64>,
}

impl EigenPairs {
    /// Number of eigenpairs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no eigenpairs.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Eigen-decompose a symmetric matrix.
///
/// Only the lower triangle is read.
///
/// # Errors
///
/// Returns [`PodError::SolverFailure`] if the solver does not converge or
/// produces non-finite eigenvalues.
///
/// # Panics
///
/// Panics if the matrix is not square.
pub fn symmetric_eigen(matrix: MatRef<'_, f64>) -> Result<EigenPairs, PodError> {
    assert_eq!(
        matrix.nrows(),
        matrix.ncols(),
        "Eigen-decomposition requires a square matrix"
    );

    let eig = matrix
        .self_adjoint_eigen(Side::Lower)
        .map_err(|e| PodError::SolverFailure(format!("{:?}", e)))?;

    let s = eig.S().column_vector();
    let values: Vec<f64> = (0..s.nrows()).map(|i| s[i]).collect();

    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(PodError::SolverFailure(format!(
            "non-finite eigenvalue {}",
            bad
        )));
    }

    Ok(EigenPairs {
        values,
        vectors: eig.U().to_owned(),
    })
}
