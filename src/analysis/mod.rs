//! Diagnostics for POD results.
//!
//! - [`EnergySpectrum`]: ranked mode energies and cumulative fractions
//! - [`ReconstructionMetrics`]: snapshot reconstruction errors
//! - [`orthonormality_error`]: deviation of the basis from orthonormality

mod reconstruction;
mod spectrum;

pub use reconstruction::{orthonormality_error, ReconstructionMetrics};
pub use spectrum::EnergySpectrum;
