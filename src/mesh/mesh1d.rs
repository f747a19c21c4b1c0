//! 1D mesh representation.
//!
//! A 1D mesh is a partition of an interval [x_min, x_max] into cells. Each
//! cell carries one degree of freedom whose weight is the cell length.

use crate::field::{CellWeights, WeightProvider};
use crate::pod::PodError;

/// 1D mesh of an interval.
#[derive(Clone, Debug)]
pub struct Mesh1D {
    /// Left endpoint of domain
    pub x_min: f64,
    /// Right endpoint of domain
    pub x_max: f64,
    /// Number of cells
    pub n_cells: usize,
    /// Cell vertices: vertices[k] is left endpoint of cell k
    /// vertices has length n_cells + 1
    pub vertices: Vec<f64>,
    /// Cell sizes: h[k] = vertices[k+1] - vertices[k]
    pub cell_sizes: Vec<f64>,
}

impl Mesh1D {
    /// Create a uniform mesh of [x_min, x_max] with n_cells cells.
    pub fn uniform(x_min: f64, x_max: f64, n_cells: usize) -> Self {
        assert!(n_cells > 0, "Need at least one cell");
        assert!(x_max > x_min, "x_max must be greater than x_min");

        let h = (x_max - x_min) / n_cells as f64;
        let vertices: Vec<f64> = (0..=n_cells).map(|i| x_min + i as f64 * h).collect();

        Self {
            x_min,
            x_max,
            n_cells,
            vertices,
            cell_sizes: vec![h; n_cells],
        }
    }

    /// Create a mesh from strictly increasing vertex coordinates.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two vertices are given or they are not
    /// strictly increasing.
    pub fn from_vertices(vertices: Vec<f64>) -> Self {
        assert!(vertices.len() >= 2, "Need at least two vertices");
        let cell_sizes: Vec<f64> = vertices.windows(2).map(|w| w[1] - w[0]).collect();
        assert!(
            cell_sizes.iter().all(|&h| h > 0.0),
            "Vertices must be strictly increasing"
        );

        Self {
            x_min: vertices[0],
            x_max: vertices[vertices.len() - 1],
            n_cells: cell_sizes.len(),
            vertices,
            cell_sizes,
        }
    }

    /// Midpoint of cell k.
    pub fn cell_center(&self, k: usize) -> f64 {
        0.5 * (self.vertices[k] + self.vertices[k + 1])
    }

    /// Midpoints of all cells.
    pub fn cell_centers(&self) -> Vec<f64> {
        (0..self.n_cells).map(|k| self.cell_center(k)).collect()
    }

    /// Get total domain length.
    pub fn length(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Get minimum cell size.
    pub fn h_min(&self) -> f64 {
        self.cell_sizes.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

impl WeightProvider for Mesh1D {
    fn n_dofs(&self) -> usize {
        self.n_cells
    }

    fn cell_weights(&self) -> Result<CellWeights, PodError> {
        CellWeights::new(self.cell_sizes.clone())
    }
}
