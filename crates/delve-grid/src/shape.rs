//! Grid dimensions and the position ↔ handle mapping.

use crate::error::GridError;
use delve_core::{CellId, Vector, DIRS_8};

/// Validated dimensions of a rectangular grid.
///
/// Cells are laid out column-major ("x-major"): all rows of column 0,
/// then all rows of column 1, and so on. The cell at `(x, y)` therefore
/// has handle `x * rows + y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    cols: u32,
    rows: u32,
}

impl GridShape {
    /// Largest supported dimension: offsets are `i32` on each axis.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM), or `Err(GridError::TooManyCells)` if
    /// the cell count does not fit a [`CellId`].
    pub fn new(cols: u32, rows: u32) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::EmptyGrid);
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if u64::from(cols) * u64::from(rows) > u64::from(u32::MAX) {
            return Err(GridError::TooManyCells { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    /// Number of columns (extent along x).
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of rows (extent along y).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Vector) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.cols && (pos.y as u32) < self.rows
    }

    /// Handle of the cell at `pos`, or `None` outside the grid.
    pub fn id_of(&self, pos: Vector) -> Option<CellId> {
        if !self.contains(pos) {
            return None;
        }
        Some(CellId(pos.x as u32 * self.rows + pos.y as u32))
    }

    /// Offset of the cell with handle `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a handle of this grid.
    pub fn offset_of(&self, id: CellId) -> Vector {
        assert!(
            id.index() < self.cell_count(),
            "{id} out of range for {}x{} grid",
            self.cols,
            self.rows
        );
        Vector::new((id.0 / self.rows) as i32, (id.0 % self.rows) as i32)
    }

    /// Every position in handle order.
    pub fn positions(&self) -> impl Iterator<Item = Vector> + '_ {
        (0..self.cols as i32).flat_map(move |x| (0..self.rows as i32).map(move |y| Vector::new(x, y)))
    }

    /// In-bounds Moore neighbours of `pos`, as `(delta, handle)` pairs in
    /// [`DIRS_8`] order.
    pub fn neighbours(&self, pos: Vector) -> impl Iterator<Item = (Vector, CellId)> + '_ {
        DIRS_8
            .iter()
            .filter_map(move |&d| self.id_of(pos + d).map(|id| (d, id)))
    }
}
