//! Rectilinear 2D grid.
//!
//! Cells are numbered row-major: cell k = j * nx + i covers
//! [x_i, x_{i+1}] × [y_j, y_{j+1}]. The weight of a cell is its area.

use crate::field::{CellWeights, WeightProvider};
use crate::pod::PodError;

/// Tensor-product grid with possibly non-uniform spacing in x and y.
#[derive(Clone, Debug)]
pub struct Grid2D {
    /// Vertex x-coordinates (length nx + 1)
    pub x_vertices: Vec<f64>,
    /// Vertex y-coordinates (length ny + 1)
    pub y_vertices: Vec<f64>,
    /// Number of cells in x
    pub nx: usize,
    /// Number of cells in y
    pub ny: usize,
}

impl Grid2D {
    /// Uniform grid of [x0, x1] × [y0, y1] with nx × ny cells.
    pub fn uniform_rectangle(x0: f64, x1: f64, y0: f64, y1: f64, nx: usize, ny: usize) -> Self {
        assert!(nx > 0 && ny > 0, "Need at least one cell in each direction");
        assert!(x1 > x0 && y1 > y0, "Rectangle must have positive extent");

        let dx = (x1 - x0) / nx as f64;
        let dy = (y1 - y0) / ny as f64;

        Self {
            x_vertices: (0..=nx).map(|i| x0 + i as f64 * dx).collect(),
            y_vertices: (0..=ny).map(|j| y0 + j as f64 * dy).collect(),
            nx,
            ny,
        }
    }

    /// Grid from strictly increasing vertex coordinates in each direction.
    pub fn from_vertices(x_vertices: Vec<f64>, y_vertices: Vec<f64>) -> Self {
        assert!(
            x_vertices.len() >= 2 && y_vertices.len() >= 2,
            "Need at least two vertices in each direction"
        );
        assert!(
            x_vertices.windows(2).all(|w| w[1] > w[0])
                && y_vertices.windows(2).all(|w| w[1] > w[0]),
            "Vertices must be strictly increasing"
        );

        let nx = x_vertices.len() - 1;
        let ny = y_vertices.len() - 1;
        Self {
            x_vertices,
            y_vertices,
            nx,
            ny,
        }
    }

    /// Total number of cells.
    pub fn n_cells(&self) -> usize {
        self.nx * self.ny
    }

    /// Row-major cell index of (i, j).
    #[inline]
    pub fn cell_index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.nx && j < self.ny);
        j * self.nx + i
    }

    /// Area of cell k.
    pub fn cell_area(&self, k: usize) -> f64 {
        let (i, j) = (k % self.nx, k / self.nx);
        let dx = self.x_vertices[i + 1] - self.x_vertices[i];
        let dy = self.y_vertices[j + 1] - self.y_vertices[j];
        dx * dy
    }

    /// Centroid of cell k.
    pub fn cell_center(&self, k: usize) -> (f64, f64) {
        let (i, j) = (k % self.nx, k / self.nx);
        (
            0.5 * (self.x_vertices[i] + self.x_vertices[i + 1]),
            0.5 * (self.y_vertices[j] + self.y_vertices[j + 1]),
        )
    }

    /// Total area of the grid.
    pub fn area(&self) -> f64 {
        (self.x_vertices[self.nx] - self.x_vertices[0])
            * (self.y_vertices[self.ny] - self.y_vertices[0])
    }
}

impl WeightProvider for Grid2D {
    fn n_dofs(&self) -> usize {
        self.n_cells()
    }

    fn cell_weights(&self) -> Result<CellWeights, PodError> {
        CellWeights::new((0..self.n_cells()).map(|k| self.cell_area(k)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_cell_areas() {
        let grid = Grid2D::uniform_rectangle(0.0, 2.0, 0.0, 1.0, 4, 2);
        assert_eq!(grid.n_cells(), 8);
        for k in 0..grid.n_cells() {
            assert!((grid.cell_area(k) - 0.25).abs() < 1e-14);
        }
        let w = grid.cell_weights().unwrap();
        assert!((w.total() - grid.area()).abs() < 1e-12);
    }

    #[test]
    fn test_cell_numbering() {
        let grid = Grid2D::from_vertices(vec![0.0, 1.0, 3.0], vec![0.0, 0.5, 2.0]);
        let k = grid.cell_index(1, 1);
        assert_eq!(k, 3);
        assert!((grid.cell_area(k) - 3.0).abs() < 1e-14);
        let (cx, cy) = grid.cell_center(k);
        assert!((cx - 2.0).abs() < 1e-14);
        assert!((cy - 1.25).abs() < 1e-14);
    }
}
