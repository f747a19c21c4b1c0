//! Energy-based truncation of the eigen-spectrum.
//!
//! Eigenvalues of the correlation matrix are the energies of the POD modes.
//! The basis keeps the smallest number K of most energetic modes whose
//! cumulative energy reaches the accuracy target:
//! ```text
//! K = min { k : Σ_{m<k} λ_m / Σ_m λ_m ≥ a }
//! ```
//! Eigenvalues are first clamped: finite-precision solvers return tiny or
//! slightly negative values for rank-deficient snapshot sets, and such
//! modes must never enter the basis (their normalisation divides by √λ).

use log::{debug, warn};

/// Result of ranking and truncating the eigen-spectrum.
#[derive(Clone, Debug, PartialEq)]
pub struct Truncation {
    /// Number of retained modes K
    pub base_size: usize,
    /// Original eigenpair index of each ranked mode, most energetic first (length N)
    pub order: Vec<usize>,
    /// Clamped eigenvalue of each ranked mode (length N, non-increasing)
    pub spectrum: Vec<f64>,
    /// Sum of the clamped spectrum
    pub total_energy: f64,
}

impl Truncation {
    /// Energy captured by the retained modes.
    pub fn retained_energy(&self) -> f64 {
        self.spectrum[..self.base_size].iter().sum()
    }

    /// Fraction of total energy captured by the retained modes
    /// (zero for a zero-energy spectrum).
    pub fn retained_fraction(&self) -> f64 {
        if self.total_energy > 0.0 {
            self.retained_energy() / self.total_energy
        } else {
            0.0
        }
    }
}

/// Clamp eigenvalue noise to zero.
///
/// Values at or below `relative_tolerance * λ_max`, negative values and
/// non-finite values become zero. If no eigenvalue is positive, all become
/// zero.
pub fn clamp_eigenvalues(eigenvalues: &[f64], relative_tolerance: f64) -> Vec<f64> {
    let lambda_max = eigenvalues
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let threshold = relative_tolerance * lambda_max;

    let clamped: Vec<f64> = eigenvalues
        .iter()
        .map(|&v| {
            if lambda_max > 0.0 && v.is_finite() && v > threshold {
                v
            } else {
                0.0
            }
        })
        .collect();

    // A large negative eigenvalue means the matrix was not PSD
    if let Some(&most_negative) = eigenvalues
        .iter()
        .filter(|v| v.is_finite())
        .min_by(|a, b| a.total_cmp(b))
    {
        if lambda_max > 0.0 && most_negative < -1e-8 * lambda_max {
            warn!(
                "Correlation matrix has eigenvalue {:.3e} (λ_max = {:.3e}); clamped to zero",
                most_negative, lambda_max
            );
        }
    }

    clamped
}

/// Rank eigenvalues by energy and select the basis size.
///
/// Ties keep their original order, so the result is deterministic. The
/// total and the cumulative sum are accumulated in the same ranked order,
/// which makes an accuracy of exactly 1 reachable and keeps every
/// zero-energy mode out of the basis.
///
/// A spectrum with zero total energy yields `base_size == 0`.
///
/// # Panics
///
/// Panics if `accuracy` is outside (0, 1]; callers validate it first.
pub fn select_modes(eigenvalues: &[f64], accuracy: f64, relative_tolerance: f64) -> Truncation {
    assert!(
        accuracy > 0.0 && accuracy <= 1.0,
        "Accuracy must lie in (0, 1], got {}",
        accuracy
    );

    let clamped = clamp_eigenvalues(eigenvalues, relative_tolerance);

    let mut ranked: Vec<(usize, f64)> = clamped.into_iter().enumerate().collect();
    // Stable sort: equal energies keep ascending original index
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let order: Vec<usize> = ranked.iter().map(|&(i, _)| i).collect();
    let spectrum: Vec<f64> = ranked.iter().map(|&(_, v)| v).collect();
    let total_energy: f64 = spectrum.iter().sum();

    let base_size = if total_energy > 0.0 {
        modes_for_accuracy(&spectrum, total_energy, accuracy)
    } else {
        warn!(
            "Snapshot set carries no energy ({} eigenvalues clamped to zero); basis is empty",
            spectrum.len()
        );
        0
    };

    debug!(
        "Truncation: {} of {} modes for accuracy {}",
        base_size,
        spectrum.len(),
        accuracy
    );

    Truncation {
        base_size,
        order,
        spectrum,
        total_energy,
    }
}

/// Smallest prefix of a non-increasing spectrum whose energy fraction
/// reaches `accuracy`.
///
/// The fraction is formed exactly as [`EnergySpectrum::cumulative_fraction`]
/// forms it, so an accuracy equal to a prefix fraction selects that prefix.
///
/// [`EnergySpectrum::cumulative_fraction`]: crate::analysis::EnergySpectrum::cumulative_fraction
pub(crate) fn modes_for_accuracy(spectrum: &[f64], total_energy: f64, accuracy: f64) -> usize {
    let mut cumulative = 0.0;
    for (k, &lambda) in spectrum.iter().enumerate() {
        if lambda <= 0.0 {
            // Remaining modes carry no energy
            return k;
        }
        cumulative += lambda;
        if cumulative / total_energy >= accuracy {
            return k + 1;
        }
    }
    spectrum.iter().take_while(|&&v| v > 0.0).count()
}
