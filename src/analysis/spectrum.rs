//! Energy spectrum of a POD.

use crate::pod::truncation::modes_for_accuracy;
use crate::pod::Truncation;

/// Clamped mode energies, most energetic first.
#[derive(Clone, Debug, PartialEq)]
pub struct EnergySpectrum {
    eigenvalues: Vec<f64>,
    total_energy: f64,
}

impl EnergySpectrum {
    /// Build from a ranked, non-increasing, non-negative spectrum.
    ///
    /// # Panics
    ///
    /// Panics if the values are negative or not sorted descending.
    pub fn new(eigenvalues: Vec<f64>) -> Self {
        assert!(
            eigenvalues.iter().all(|&v| v >= 0.0),
            "Energies must be non-negative"
        );
        assert!(
            eigenvalues.windows(2).all(|w| w[0] >= w[1]),
            "Energies must be sorted descending"
        );
        let total_energy = eigenvalues.iter().sum();
        Self {
            eigenvalues,
            total_energy,
        }
    }

    /// Ranked energies (length = number of snapshots).
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// Number of modes in the spectrum.
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Whether the spectrum is empty.
    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }

    /// Sum of all energies.
    pub fn total_energy(&self) -> f64 {
        self.total_energy
    }

    /// Number of modes carrying non-zero energy (numerical rank).
    pub fn n_nonzero(&self) -> usize {
        self.eigenvalues.iter().take_while(|&&v| v > 0.0).count()
    }

    /// Share of the total energy carried by mode k.
    pub fn energy_fraction(&self, k: usize) -> f64 {
        if self.total_energy > 0.0 {
            self.eigenvalues[k] / self.total_energy
        } else {
            0.0
        }
    }

    /// Share of the total energy carried by the first `n_modes` modes.
    pub fn cumulative_fraction(&self, n_modes: usize) -> f64 {
        if self.total_energy > 0.0 {
            let captured: f64 = self.eigenvalues[..n_modes.min(self.len())].iter().sum();
            captured / self.total_energy
        } else {
            0.0
        }
    }

    /// Cumulative fractions after 1, 2, ..., N modes.
    pub fn cumulative_fractions(&self) -> Vec<f64> {
        let mut cumulative = 0.0;
        self.eigenvalues
            .iter()
            .map(|&v| {
                cumulative += v;
                if self.total_energy > 0.0 {
                    cumulative / self.total_energy
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Smallest number of modes reaching `accuracy`, with the same rule as
    /// basis construction.
    ///
    /// # Panics
    ///
    /// Panics if `accuracy` is outside (0, 1].
    pub fn modes_for_accuracy(&self, accuracy: f64) -> usize {
        assert!(
            accuracy > 0.0 && accuracy <= 1.0,
            "Accuracy must lie in (0, 1], got {}",
            accuracy
        );
        if self.total_energy > 0.0 {
            modes_for_accuracy(&self.eigenvalues, self.total_energy, accuracy)
        } else {
            0
        }
    }
}

impl From<&Truncation> for EnergySpectrum {
    fn from(t: &Truncation) -> Self {
        Self {
            eigenvalues: t.spectrum.clone(),
            total_energy: t.total_energy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractions() {
        let s = EnergySpectrum::new(vec![6.0, 3.0, 1.0, 0.0]);
        assert_eq!(s.total_energy(), 10.0);
        assert_eq!(s.n_nonzero(), 3);
        assert!((s.energy_fraction(1) - 0.3).abs() < 1e-14);
        assert!((s.cumulative_fraction(2) - 0.9).abs() < 1e-14);
        assert!((s.cumulative_fraction(10) - 1.0).abs() < 1e-14);

        let cum = s.cumulative_fractions();
        assert_eq!(cum.len(), 4);
        assert!((cum[0] - 0.6).abs() < 1e-14);
        assert!((cum[3] - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_modes_for_accuracy() {
        let s = EnergySpectrum::new(vec![6.0, 3.0, 1.0, 0.0]);
        assert_eq!(s.modes_for_accuracy(0.5), 1);
        assert_eq!(s.modes_for_accuracy(0.85), 2);
        assert_eq!(s.modes_for_accuracy(1.0), 3);
    }

    #[test]
    fn test_cumulative_fraction_round_trips_to_mode_count() {
        let s = EnergySpectrum::new(vec![85.39871307856775, 58.64994842253566]);
        assert_eq!(s.modes_for_accuracy(s.cumulative_fraction(1)), 1);
        assert_eq!(s.modes_for_accuracy(s.cumulative_fraction(2)), 2);
    }

    #[test]
    fn test_zero_spectrum() {
        let s = EnergySpectrum::new(vec![0.0, 0.0]);
        assert_eq!(s.modes_for_accuracy(0.5), 0);
        assert_eq!(s.cumulative_fraction(2), 0.0);
        assert_eq!(s.n_nonzero(), 0);
    }

    #[test]
    #[should_panic(expected = "sorted descending")]
    fn test_unsorted_panics() {
        EnergySpectrum::new(vec![1.0, 2.0]);
    }
}
