//! Snapshot field storage.
//!
//! A [`Field`] holds one value per degree of freedom (e.g. one cell
//! average per mesh element). The component kind is fixed at compile time
//! through the [`FieldComponent`] parameter.

use std::ops::Index;

use crate::types::FieldComponent;

/// Values of a single field over a fixed set of degrees of freedom.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<T> {
    values: Vec<T>,
}

impl<T: FieldComponent> Field<T> {
    /// Wrap per-DOF values.
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Create a field of `n_dofs` zeros.
    pub fn zeros(n_dofs: usize) -> Self {
        Self {
            values: vec![T::zero(); n_dofs],
        }
    }

    /// Create a field by evaluating `f` at every DOF index.
    pub fn from_fn(n_dofs: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            values: (0..n_dofs).map(f).collect(),
        }
    }

    /// Number of degrees of freedom.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the field has no degrees of freedom.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Per-DOF values.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consume the field, returning the per-DOF values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Iterate over per-DOF values.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Scale all values by a constant.
    pub fn scale(&mut self, c: f64) {
        for v in &mut self.values {
            *v = v.scaled(c);
        }
    }

    /// Add c * other to self (axpy operation).
    ///
    /// # Panics
    ///
    /// Panics if the fields have different DOF counts.
    pub fn axpy(&mut self, c: f64, other: &Self) {
        assert_eq!(
            self.values.len(),
            other.values.len(),
            "axpy requires fields over the same DOFs"
        );
        for (a, b) in self.values.iter_mut().zip(other.values.iter()) {
            a.add_scaled(c, b);
        }
    }

    /// Maximum pointwise magnitude.
    pub fn max_mag(&self) -> f64 {
        self.values
            .iter()
            .map(|v| v.mag_sqr().sqrt())
            .fold(0.0, f64::max)
    }

    /// Whether every value is finite.
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

impl<T> Index<usize> for Field<T> {
    type Output = T;

    #[inline]
    fn index(&self, dof: usize) -> &T {
        &self.values[dof]
    }
}

impl<T: FieldComponent> From<Vec<T>> for Field<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}
