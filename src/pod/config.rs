//! Configuration for POD basis construction.

use super::PodError;

/// Settings controlling basis size and numerics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PodConfig {
    /// Minimum fraction of total energy the basis must capture, in (0, 1].
    pub accuracy: f64,
    /// Eigenvalues at or below `eigenvalue_tolerance * λ_max` are treated as zero.
    pub eigenvalue_tolerance: f64,
    /// Assemble the correlation matrix with rayon (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for PodConfig {
    fn default() -> Self {
        Self::new(0.99999)
    }
}

impl PodConfig {
    /// Default relative clamp for eigenvalue noise.
    pub const DEFAULT_EIGENVALUE_TOLERANCE: f64 = 1e-12;

    /// Configuration with the given accuracy target and default numerics.
    pub fn new(accuracy: f64) -> Self {
        Self {
            accuracy,
            eigenvalue_tolerance: Self::DEFAULT_EIGENVALUE_TOLERANCE,
            parallel: cfg!(feature = "parallel"),
        }
    }

    /// Keep every mode carrying non-zero energy (accuracy 1).
    pub fn exact() -> Self {
        Self::new(1.0)
    }

    /// Set the accuracy target.
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Set the relative eigenvalue clamp.
    pub fn with_eigenvalue_tolerance(mut self, tolerance: f64) -> Self {
        self.eigenvalue_tolerance = tolerance;
        self
    }

    /// Enable or disable parallel correlation assembly.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the accuracy range and tolerance.
    pub fn validate(&self) -> Result<(), PodError> {
        if !(self.accuracy > 0.0 && self.accuracy <= 1.0) {
            return Err(PodError::InvalidAccuracy(self.accuracy));
        }
        if !(self.eigenvalue_tolerance.is_finite() && self.eigenvalue_tolerance >= 0.0) {
            return Err(PodError::InvalidTolerance(self.eigenvalue_tolerance));
        }
        Ok(())
    }
}
