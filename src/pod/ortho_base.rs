//! POD orthonormal base and interpolation coefficients.
//!
//! # Pipeline
//!
//! ```text
//! snapshots ─► correlation matrix C (N×N) ─► eigenpairs of C
//!           ─► energy truncation (K modes) ─► basis φ_0..φ_{K-1}
//!           ─► coefficients a[i][k] = (s_i, φ_k)_w
//! ```
//!
//! Everything is computed eagerly in the constructor. The resulting value
//! is immutable, owns its basis fields and coefficient matrix, and can be
//! shared read-only across threads.
//!
//! # Example
//!
//! ```
//! use pod_rs::{CellWeights, Field, PodOrthoNormalBase};
//!
//! let snapshots = vec![
//!     Field::new(vec![1.0, 0.0, 0.0, 0.0]),
//!     Field::new(vec![0.0, 1.0, 0.0, 0.0]),
//!     Field::new(vec![0.0, 0.0, 1.0, 0.0]),
//! ];
//! let weights = CellWeights::uniform(4);
//!
//! let pod = PodOrthoNormalBase::new(&snapshots, &weights, 0.6).unwrap();
//! assert_eq!(pod.base_size(), 2);
//! assert_eq!(pod.interpolation_coeffs().nrows(), 3);
//! ```

use faer::{Mat, MatRef};
use log::{debug, info};

use super::basis::construct_basis;
use super::coefficients::{expand, project_field, project_snapshots};
use super::eigen::symmetric_eigen;
use super::truncation::select_modes;
use super::{PodConfig, PodError};
use crate::analysis::EnergySpectrum;
use crate::field::{CellWeights, Field, WeightProvider};
use crate::operators::correlation_matrix;
#[cfg(feature = "parallel")]
use crate::operators::correlation_matrix_parallel;
use crate::types::{FieldComponent, ModeIndex, SnapshotIndex};

/// Orthonormal POD basis of a snapshot set, with the coefficients that
/// express each snapshot in that basis.
///
/// Not `Clone`: the basis fields and coefficient matrix are owned
/// exclusively by this value.
#[derive(Debug)]
pub struct PodOrthoNormalBase<T: FieldComponent> {
    ortho_fields: Vec<Field<T>>,
    interpolation_coeffs: Mat<f64>,
    spectrum: EnergySpectrum,
    weights: CellWeights,
    accuracy: f64,
    n_dofs: usize,
}

impl<T: FieldComponent> PodOrthoNormalBase<T> {
    /// Build the basis capturing at least `accuracy` of the snapshot energy.
    ///
    /// # Errors
    ///
    /// - [`PodError::InvalidAccuracy`] if `accuracy` is not in (0, 1]
    /// - [`PodError::EmptySnapshots`] if `snapshots` is empty
    /// - [`PodError::LayoutMismatch`] if snapshots differ in DOF count
    /// - [`PodError::NonFiniteSnapshot`] if a snapshot holds NaN or infinity
    /// - [`PodError::WeightLengthMismatch`] if the weights do not cover the DOFs
    /// - [`PodError::SolverFailure`] if the eigensolver fails
    pub fn new(
        snapshots: &[Field<T>],
        weights: &CellWeights,
        accuracy: f64,
    ) -> Result<Self, PodError> {
        Self::with_config(snapshots, weights, &PodConfig::new(accuracy))
    }

    /// Build the basis with weights taken from a provider such as a mesh.
    ///
    /// The provider's DOF count is checked against the snapshots before any
    /// weights are built.
    pub fn from_provider<P: WeightProvider + ?Sized>(
        snapshots: &[Field<T>],
        provider: &P,
        config: &PodConfig,
    ) -> Result<Self, PodError> {
        config.validate()?;
        let n_dofs = validate_snapshots(snapshots)?;
        check_weight_count(n_dofs, provider.n_dofs())?;
        let weights = provider.cell_weights()?;
        check_weight_count(n_dofs, weights.len())?;
        Self::build(snapshots, &weights, config, n_dofs)
    }

    /// Build the basis with explicit settings.
    pub fn with_config(
        snapshots: &[Field<T>],
        weights: &CellWeights,
        config: &PodConfig,
    ) -> Result<Self, PodError> {
        config.validate()?;
        let n_dofs = validate_snapshots(snapshots)?;
        check_weight_count(n_dofs, weights.len())?;
        Self::build(snapshots, weights, config, n_dofs)
    }

    /// Run the pipeline on validated inputs.
    fn build(
        snapshots: &[Field<T>],
        weights: &CellWeights,
        config: &PodConfig,
        n_dofs: usize,
    ) -> Result<Self, PodError> {
        debug!(
            "POD: {} snapshots × {} DOFs ({} components each)",
            snapshots.len(),
            n_dofs,
            T::N_COMPONENTS
        );

        let correlation = assemble_correlation(snapshots, weights, config.parallel);
        let eigenpairs = symmetric_eigen(correlation.as_ref())?;
        let truncation = select_modes(
            &eigenpairs.values,
            config.accuracy,
            config.eigenvalue_tolerance,
        );
        let ortho_fields = construct_basis(snapshots, &eigenpairs, &truncation);
        let interpolation_coeffs = project_snapshots(snapshots, &ortho_fields, weights);

        info!(
            "POD basis: {} of {} modes capture {:.6}% of energy (target {:.6}%)",
            truncation.base_size,
            snapshots.len(),
            100.0 * truncation.retained_fraction(),
            100.0 * config.accuracy
        );

        Ok(Self {
            ortho_fields,
            interpolation_coeffs,
            spectrum: EnergySpectrum::from(&truncation),
            weights: weights.clone(),
            accuracy: config.accuracy,
            n_dofs,
        })
    }

    /// Number of basis fields K.
    #[inline]
    pub fn base_size(&self) -> usize {
        self.ortho_fields.len()
    }

    /// The n-th orthonormal basis field, most energetic first.
    ///
    /// # Panics
    ///
    /// Panics if `index >= base_size()`.
    pub fn ortho_field(&self, index: usize) -> &Field<T> {
        assert!(
            index < self.base_size(),
            "Mode index {} out of range for basis of size {}",
            index,
            self.base_size()
        );
        &self.ortho_fields[index]
    }

    /// The n-th basis field, or `None` if out of range.
    pub fn get_ortho_field(&self, index: usize) -> Option<&Field<T>> {
        self.ortho_fields.get(index)
    }

    /// All basis fields, most energetic first.
    pub fn ortho_fields(&self) -> &[Field<T>] {
        &self.ortho_fields
    }

    /// Interpolation coefficients (snapshots × basis fields).
    pub fn interpolation_coeffs(&self) -> MatRef<'_, f64> {
        self.interpolation_coeffs.as_ref()
    }

    /// Coefficient of `mode` in the expansion of `snapshot`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn coefficient(&self, snapshot: SnapshotIndex, mode: ModeIndex) -> f64 {
        self.interpolation_coeffs[(snapshot.get(), mode.get())]
    }

    /// Coefficients of snapshot i, one per mode.
    pub fn snapshot_coeffs(&self, snapshot: usize) -> Vec<f64> {
        let snapshot = SnapshotIndex::new(snapshot);
        ModeIndex::iter(self.base_size())
            .map(|mode| self.coefficient(snapshot, mode))
            .collect()
    }

    /// Number of snapshots the basis was built from.
    pub fn n_snapshots(&self) -> usize {
        self.interpolation_coeffs.nrows()
    }

    /// Degrees of freedom per field.
    pub fn n_dofs(&self) -> usize {
        self.n_dofs
    }

    /// Requested accuracy target.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Weights used for every inner product.
    pub fn weights(&self) -> &CellWeights {
        &self.weights
    }

    /// Clamped, ranked energy spectrum of the snapshot set.
    pub fn spectrum(&self) -> &EnergySpectrum {
        &self.spectrum
    }

    /// Fraction of total energy captured by the basis.
    pub fn captured_energy_fraction(&self) -> f64 {
        self.spectrum.cumulative_fraction(self.base_size())
    }

    /// Reconstruct snapshot i from its coefficients: Σ_k a[i][k] φ_k.
    ///
    /// # Panics
    ///
    /// Panics if the snapshot index is out of range.
    pub fn reconstruct(&self, snapshot: usize) -> Field<T> {
        assert!(
            snapshot < self.n_snapshots(),
            "Snapshot index {} out of range for {} snapshots",
            snapshot,
            self.n_snapshots()
        );
        expand(&self.snapshot_coeffs(snapshot), &self.ortho_fields, self.n_dofs)
    }

    /// Coefficients of an arbitrary field in this basis.
    pub fn project(&self, field: &Field<T>) -> Result<Vec<f64>, PodError> {
        if field.len() != self.n_dofs {
            return Err(PodError::LayoutMismatch {
                index: 0,
                expected: self.n_dofs,
                found: field.len(),
            });
        }
        Ok(project_field(field, &self.ortho_fields, &self.weights))
    }

    /// Field with the given coefficients: Σ_k coefficients[k] φ_k.
    pub fn expand(&self, coefficients: &[f64]) -> Result<Field<T>, PodError> {
        if coefficients.len() != self.base_size() {
            return Err(PodError::CoefficientLengthMismatch {
                expected: self.base_size(),
                found: coefficients.len(),
            });
        }
        Ok(expand(coefficients, &self.ortho_fields, self.n_dofs))
    }
}

fn check_weight_count(n_dofs: usize, n_weights: usize) -> Result<(), PodError> {
    if n_weights == n_dofs {
        Ok(())
    } else {
        Err(PodError::WeightLengthMismatch {
            expected: n_dofs,
            found: n_weights,
        })
    }
}

/// Check that the set is non-empty, shares one DOF layout and is finite.
/// Returns the DOF count.
fn validate_snapshots<T: FieldComponent>(snapshots: &[Field<T>]) -> Result<usize, PodError> {
    let first = snapshots.first().ok_or(PodError::EmptySnapshots)?;
    let n_dofs = first.len();

    for (index, snapshot) in snapshots.iter().enumerate() {
        if snapshot.len() != n_dofs {
            return Err(PodError::LayoutMismatch {
                index,
                expected: n_dofs,
                found: snapshot.len(),
            });
        }
        if !snapshot.is_finite() {
            return Err(PodError::NonFiniteSnapshot(index));
        }
    }

    Ok(n_dofs)
}

#[cfg(feature = "parallel")]
fn assemble_correlation<T: FieldComponent>(
    snapshots: &[Field<T>],
    weights: &CellWeights,
    parallel: bool,
) -> Mat<f64> {
    if parallel {
        correlation_matrix_parallel(snapshots, weights)
    } else {
        correlation_matrix(snapshots, weights)
    }
}

#[cfg(not(feature = "parallel"))]
fn assemble_correlation<T: FieldComponent>(
    snapshots: &[Field<T>],
    weights: &CellWeights,
    _parallel: bool,
) -> Mat<f64> {
    correlation_matrix(snapshots, weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::orthonormality_error;
    use crate::mesh::Mesh1D;
    use crate::types::Vector3;

    fn unit_snapshots() -> Vec<Field<f64>> {
        vec![
            Field::new(vec![1.0, 0.0, 0.0, 0.0]),
            Field::new(vec![0.0, 1.0, 0.0, 0.0]),
            Field::new(vec![0.0, 0.0, 1.0, 0.0]),
        ]
    }

    #[test]
    fn test_rejects_invalid_accuracy() {
        let snaps = unit_snapshots();
        let w = CellWeights::uniform(4);
        for a in [0.0, -0.5, 1.5, f64::NAN] {
            assert!(
                matches!(
                    PodOrthoNormalBase::new(&snaps, &w, a),
                    Err(PodError::InvalidAccuracy(_))
                ),
                "accuracy {} should be rejected",
                a
            );
        }
    }

    #[test]
    fn test_rejects_empty_snapshots() {
        let snaps: Vec<Field<f64>> = Vec::new();
        let result = PodOrthoNormalBase::new(&snaps, &CellWeights::uniform(4), 0.9);
        assert!(matches!(result, Err(PodError::EmptySnapshots)));
    }

    #[test]
    fn test_rejects_layout_mismatch() {
        let mut snaps = unit_snapshots();
        snaps.push(Field::new(vec![1.0, 2.0]));
        let result = PodOrthoNormalBase::new(&snaps, &CellWeights::uniform(4), 0.9);
        assert_eq!(
            result.unwrap_err(),
            PodError::LayoutMismatch {
                index: 3,
                expected: 4,
                found: 2
            }
        );
    }

    #[test]
    fn test_rejects_weight_length_mismatch() {
        let result = PodOrthoNormalBase::new(&unit_snapshots(), &CellWeights::uniform(3), 0.9);
        assert_eq!(
            result.unwrap_err(),
            PodError::WeightLengthMismatch {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_provider_dof_count_checked_before_weights() {
        let mesh = Mesh1D::uniform(0.0, 1.0, 5);
        let result =
            PodOrthoNormalBase::from_provider(&unit_snapshots(), &mesh, &PodConfig::new(0.9));
        assert_eq!(
            result.unwrap_err(),
            PodError::WeightLengthMismatch {
                expected: 4,
                found: 5
            }
        );

        let mesh = Mesh1D::uniform(0.0, 1.0, 4);
        let pod = PodOrthoNormalBase::from_provider(&unit_snapshots(), &mesh, &PodConfig::exact())
            .unwrap();
        assert_eq!(pod.base_size(), 3);
        assert!((pod.weights().total() - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_eigenvalue_tolerance_decides_near_dependent_mode() {
        // Third snapshot is the sum of the first two plus a 1e-4 perturbation:
        // its residual mode carries about 1e-9 of the leading energy
        let snaps = vec![
            Field::new(vec![1.0, 0.0, 0.0]),
            Field::new(vec![0.0, 1.0, 0.0]),
            Field::new(vec![1.0, 1.0, 1e-4]),
        ];
        let w = CellWeights::uniform(3);

        let tight = PodOrthoNormalBase::with_config(&snaps, &w, &PodConfig::exact()).unwrap();
        assert_eq!(tight.base_size(), 3);

        let loose_config = PodConfig::exact().with_eigenvalue_tolerance(1e-6);
        let loose = PodOrthoNormalBase::with_config(&snaps, &w, &loose_config).unwrap();
        assert_eq!(loose.base_size(), 2, "Near-dependent mode should be clamped");
        assert_eq!(loose.spectrum().eigenvalues()[2], 0.0);
        assert_eq!(loose.spectrum().n_nonzero(), 2);
        assert!(orthonormality_error(loose.ortho_fields(), &w) < 1e-10);
    }

    #[test]
    fn test_overflowing_energies_report_solver_failure() {
        // Finite values whose squared norms overflow to infinity
        let snaps = vec![Field::new(vec![1e200, 0.0]), Field::new(vec![0.0, 1e200])];
        let result = PodOrthoNormalBase::new(&snaps, &CellWeights::uniform(2), 0.9);
        assert!(
            matches!(result, Err(PodError::SolverFailure(_))),
            "expected SolverFailure, got {:?}",
            result
        );
    }

    #[test]
    fn test_rejects_non_finite_snapshot() {
        let mut snaps = unit_snapshots();
        snaps[1] = Field::new(vec![0.0, f64::NAN, 0.0, 0.0]);
        let result = PodOrthoNormalBase::new(&snaps, &CellWeights::uniform(4), 0.9);
        assert_eq!(result.unwrap_err(), PodError::NonFiniteSnapshot(1));
    }

    #[test]
    fn test_equal_energy_unit_snapshots() {
        let snaps = unit_snapshots();
        let w = CellWeights::uniform(4);

        assert_eq!(PodOrthoNormalBase::new(&snaps, &w, 0.3).unwrap().base_size(), 1);
        assert_eq!(PodOrthoNormalBase::new(&snaps, &w, 0.66).unwrap().base_size(), 2);
        assert_eq!(PodOrthoNormalBase::new(&snaps, &w, 0.67).unwrap().base_size(), 3);
    }

    #[test]
    fn test_zero_snapshots_give_empty_basis() {
        let snaps = vec![Field::new(vec![0.0; 3]), Field::new(vec![0.0; 3])];
        let pod = PodOrthoNormalBase::new(&snaps, &CellWeights::uniform(3), 0.99).unwrap();

        assert_eq!(pod.base_size(), 0);
        assert_eq!(pod.interpolation_coeffs().nrows(), 2);
        assert_eq!(pod.interpolation_coeffs().ncols(), 0);
        assert_eq!(pod.captured_energy_fraction(), 0.0);
        assert_eq!(pod.reconstruct(1).values(), &[0.0; 3]);
        assert!(pod.get_ortho_field(0).is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_ortho_field_out_of_range_panics() {
        let pod =
            PodOrthoNormalBase::new(&unit_snapshots(), &CellWeights::uniform(4), 0.5).unwrap();
        pod.ortho_field(pod.base_size());
    }

    #[test]
    fn test_vector_snapshots() {
        let snaps: Vec<Field<Vector3>> = (0..4)
            .map(|s| {
                Field::from_fn(6, |i| {
                    let x = i as f64;
                    Vector3::new(
                        (x + s as f64).sin(),
                        (0.5 * x * (s + 1) as f64).cos(),
                        0.1 * s as f64,
                    )
                })
            })
            .collect();
        let w = CellWeights::new(vec![1.0, 0.5, 2.0, 1.5, 0.25, 1.0]).unwrap();
        let pod = PodOrthoNormalBase::new(&snaps, &w, 0.999).unwrap();

        assert!(pod.base_size() >= 1 && pod.base_size() <= 4);
        assert!(orthonormality_error(pod.ortho_fields(), &w) < 1e-8);
        assert!(pod.captured_energy_fraction() >= 0.999);
    }

    #[test]
    fn test_project_and_expand_validate_lengths() {
        let pod =
            PodOrthoNormalBase::new(&unit_snapshots(), &CellWeights::uniform(4), 1.0).unwrap();

        assert!(matches!(
            pod.project(&Field::new(vec![1.0])),
            Err(PodError::LayoutMismatch { .. })
        ));
        assert_eq!(
            pod.expand(&[1.0]).unwrap_err(),
            PodError::CoefficientLengthMismatch {
                expected: 3,
                found: 1
            }
        );

        let field = Field::new(vec![2.0, -1.0, 0.5, 7.0]);
        let a = pod.project(&field).unwrap();
        let approx = pod.expand(&a).unwrap();
        // The fourth DOF is outside the span of the snapshots
        assert!((approx[0] - 2.0).abs() < 1e-12);
        assert!((approx[1] + 1.0).abs() < 1e-12);
        assert!((approx[2] - 0.5).abs() < 1e-12);
        assert!(approx[3].abs() < 1e-12);
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<PodOrthoNormalBase<f64>>();
        assert_send_sync::<PodOrthoNormalBase<Vector3>>();
    }
}
