//! # pod-rs
//!
//! Proper Orthogonal Decomposition (POD) of snapshot fields for
//! reduced-order modelling.
//!
//! Given N snapshots of a field over a mesh (e.g. a time series from a CFD
//! run), this crate builds the smallest orthonormal basis capturing a
//! requested fraction of the snapshot energy, and the coefficients that
//! express every snapshot in that basis.
//!
//! This crate provides:
//! - Field component kinds (scalar, vector, tensor)
//! - Snapshot fields and per-cell weights (cell volumes)
//! - Reference 1D and 2D meshes supplying weights
//! - Weighted inner product and correlation matrix
//! - Energy truncation, basis construction and projection
//! - Energy spectrum and reconstruction diagnostics
//!
//! ## Example
//!
//! ```
//! use pod_rs::mesh::Mesh1D;
//! use pod_rs::{Field, PodConfig, PodOrthoNormalBase};
//!
//! let mesh = Mesh1D::uniform(0.0, 1.0, 32);
//! let x = mesh.cell_centers();
//!
//! // Travelling wave sampled at 10 instants
//! let snapshots: Vec<Field<f64>> = (0..10)
//!     .map(|n| Field::new(x.iter().map(|&x| (6.0 * x - 0.3 * n as f64).sin()).collect()))
//!     .collect();
//!
//! let pod = PodOrthoNormalBase::from_provider(&snapshots, &mesh, &PodConfig::new(0.999))
//!     .expect("valid snapshot set");
//!
//! assert!(pod.base_size() <= snapshots.len());
//! assert!(pod.captured_energy_fraction() >= 0.999);
//! ```

pub mod analysis;
pub mod field;
pub mod mesh;
pub mod operators;
pub mod pod;
pub mod types;

// Re-export main types for convenience
pub use analysis::{orthonormality_error, EnergySpectrum, ReconstructionMetrics};
pub use field::{CellWeights, Field, WeightProvider};
pub use operators::{correlation_matrix, weighted_inner_product, weighted_norm};
#[cfg(feature = "parallel")]
pub use operators::correlation_matrix_parallel;
pub use pod::{PodConfig, PodError, PodOrthoNormalBase};
pub use types::{
    FieldComponent, ModeIndex, SnapshotIndex, SphericalTensor3, SymmTensor3, Tensor3, Vector3,
};
