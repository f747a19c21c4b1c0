//! Error type for POD construction.

use thiserror::Error;

/// Reasons a POD basis cannot be built.
///
/// Every variant names the violated precondition. All checks run before
/// any computation, so a failed construction leaves nothing behind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PodError {
    /// The snapshot set is empty.
    #[error("Empty snapshot set: at least one snapshot is required")]
    EmptySnapshots,

    /// Accuracy target outside (0, 1].
    #[error("Accuracy must lie in (0, 1], got {0}")]
    InvalidAccuracy(f64),

    /// A snapshot has a different DOF count from the first snapshot.
    #[error("Snapshot {index} has {found} DOFs, expected {expected}")]
    LayoutMismatch {
        /// Position of the offending snapshot
        index: usize,
        /// DOF count of the first snapshot
        expected: usize,
        /// DOF count of the offending snapshot
        found: usize,
    },

    /// A snapshot contains NaN or infinite values.
    #[error("Snapshot {0} contains non-finite values")]
    NonFiniteSnapshot(usize),

    /// Weight vector is empty, negative, non-finite or all zero.
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Weight vector length differs from the snapshot DOF count.
    #[error("Weight vector covers {found} DOFs, snapshots have {expected}")]
    WeightLengthMismatch {
        /// DOF count of the snapshots
        expected: usize,
        /// Length of the weight vector
        found: usize,
    },

    /// Eigenvalue clamping tolerance is negative or not finite.
    #[error("Eigenvalue tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    /// Coefficient vector length differs from the basis size.
    #[error("Expected {expected} coefficients (one per mode), got {found}")]
    CoefficientLengthMismatch {
        /// Basis size
        expected: usize,
        /// Provided length
        found: usize,
    },

    /// The symmetric eigensolver did not converge.
    #[error("Eigensolver failed: {0}")]
    SolverFailure(String),
}
