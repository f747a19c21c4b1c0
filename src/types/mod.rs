//! Strongly-typed building blocks shared across the crate.
//!
//! - Component kinds a field may carry ([`FieldComponent`])
//! - Index newtypes for the coefficient matrix ([`SnapshotIndex`], [`ModeIndex`])
//!
//! # Example
//!
//! ```
//! use pod_rs::types::{FieldComponent, Vector3};
//!
//! let u = Vector3::new(1.0, 2.0, 2.0);
//! assert_eq!(u.mag_sqr(), 9.0);
//! ```

mod component;
mod indices;

pub use component::{FieldComponent, SphericalTensor3, SymmTensor3, Tensor3, Vector3};
pub use indices::{ModeIndex, SnapshotIndex};
