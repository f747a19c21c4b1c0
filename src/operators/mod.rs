//! Domain-weighted operators on snapshot fields.
//!
//! This module provides:
//! - The weighted inner product and norm (`weighted_inner_product`)
//! - The snapshot correlation matrix (`correlation_matrix`)

mod correlation;
mod inner_product;

pub use correlation::correlation_matrix;
#[cfg(feature = "parallel")]
pub use correlation::correlation_matrix_parallel;
pub use inner_product::{weighted_inner_product, weighted_norm};
