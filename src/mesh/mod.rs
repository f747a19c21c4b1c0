//! Reference weighting providers.
//!
//! Minimal cell-centred meshes that supply the per-DOF measure used by the
//! weighted inner product:
//! - 1D mesh, weight = cell length
//! - Rectilinear 2D grid, weight = cell area
//!
//! Any other mesh can take part by implementing
//! [`WeightProvider`](crate::field::WeightProvider).

mod grid2d;
mod mesh1d;

pub use grid2d::Grid2D;
pub use mesh1d::Mesh1D;
