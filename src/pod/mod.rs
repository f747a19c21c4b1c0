//! Proper Orthogonal Decomposition by the method of snapshots.
//!
//! Stages, each usable on its own:
//! - [`symmetric_eigen`]: eigenpairs of the correlation matrix
//! - [`select_modes`]: energy ranking and truncation
//! - [`construct_basis`]: orthonormal basis fields from eigenvectors
//! - [`project_snapshots`]: interpolation coefficients
//!
//! [`PodOrthoNormalBase`] runs the whole pipeline and owns the result.

mod basis;
mod coefficients;
mod config;
mod eigen;
mod error;
mod ortho_base;
pub(crate) mod truncation;

pub use basis::construct_basis;
pub use coefficients::{expand, project_field, project_snapshots};
pub use config::PodConfig;
pub use eigen::{symmetric_eigen, EigenPairs};
pub use error::PodError;
pub use ortho_base::PodOrthoNormalBase;
pub use truncation::{clamp_eigenvalues, select_modes, Truncation};
