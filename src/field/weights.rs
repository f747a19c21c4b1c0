//! Per-DOF weights for the domain inner product.
//!
//! The weight of a degree of freedom is its share of the physical measure
//! (cell length, area or volume). Using it in the inner product makes the
//! POD energy reflect the physical domain rather than the raw cell count.

use crate::pod::PodError;

/// Validated weight vector: finite, non-negative, not all zero.
#[derive(Clone, Debug, PartialEq)]
pub struct CellWeights {
    values: Vec<f64>,
    total: f64,
}

impl CellWeights {
    /// Validate and wrap a weight vector.
    ///
    /// # Errors
    ///
    /// Returns [`PodError::InvalidWeights`] if the vector is empty, contains
    /// a negative or non-finite entry, or sums to zero.
    pub fn new(values: Vec<f64>) -> Result<Self, PodError> {
        if values.is_empty() {
            return Err(PodError::InvalidWeights("weight vector is empty".into()));
        }
        if let Some((dof, w)) = values
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(PodError::InvalidWeights(format!(
                "weight {} at DOF {} is negative or not finite",
                w, dof
            )));
        }
        let total: f64 = values.iter().sum();
        if total <= 0.0 {
            return Err(PodError::InvalidWeights("all weights are zero".into()));
        }
        Ok(Self { values, total })
    }

    /// Unit weight for each of `n_dofs` degrees of freedom.
    ///
    /// # Panics
    ///
    /// Panics if `n_dofs` is zero.
    pub fn uniform(n_dofs: usize) -> Self {
        assert!(n_dofs > 0, "Need at least one DOF");
        Self {
            values: vec![1.0; n_dofs],
            total: n_dofs as f64,
        }
    }

    /// Number of degrees of freedom.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; an empty weight vector cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Per-DOF weights.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Sum of all weights (total domain measure).
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Weights rescaled to sum to one.
    pub fn normalized(&self) -> Self {
        Self {
            values: self.values.iter().map(|w| w / self.total).collect(),
            total: 1.0,
        }
    }
}

/// Supplier of per-DOF weights, typically a mesh returning cell volumes.
pub trait WeightProvider {
    /// Number of degrees of freedom the weights cover.
    fn n_dofs(&self) -> usize;

    /// Build the weight vector.
    fn cell_weights(&self) -> Result<CellWeights, PodError>;
}

impl WeightProvider for CellWeights {
    fn n_dofs(&self) -> usize {
        self.len()
    }

    fn cell_weights(&self) -> Result<CellWeights, PodError> {
        Ok(self.clone())
    }
}
