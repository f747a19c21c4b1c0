//! Snapshot fields and the weights of their degrees of freedom.

#[allow(clippy::module_inception)]
mod field;
mod weights;

pub use field::Field;
pub use weights::{CellWeights, WeightProvider};
