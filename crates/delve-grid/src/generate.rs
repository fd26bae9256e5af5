//! Grid generation and the boundary pass.

use crate::error::GridError;
use crate::shape::GridShape;
use delve_core::{CellId, Vector};
use tracing::debug;

/// Neighbour count of an interior cell under 8-directional adjacency.
pub const FULL_CONNECTIVITY: usize = 8;

/// A cell type the generator can wire into a grid.
///
/// `link` is called exactly once per (cell, in-bounds direction) pair
/// during [`generate_grid`]; after that the adjacency is treated as
/// frozen.
pub trait GridCell {
    /// Record that `neighbour` is reached from this cell by `delta`.
    fn link(&mut self, delta: Vector, neighbour: CellId);

    /// Number of neighbours linked so far.
    fn neighbour_count(&self) -> usize;
}

/// Build a `cols × rows` grid of cells.
///
/// `factory` is invoked exactly once per position, in handle order
/// (see [`GridShape`]); the returned vector is indexed by [`CellId`].
/// Once every cell exists, each one is linked to each in-bounds Moore
/// neighbour. Every link is installed from both ends, so the adjacency
/// is symmetric: if `a` reaches `b` by `d`, `b` reaches `a` by `-d`.
///
/// For grids with both dimensions ≥ 2, corners end up with 3
/// neighbours, other edge cells with 5 and interior cells with 8.
pub fn generate_grid<T, F>(cols: u32, rows: u32, mut factory: F) -> Result<Vec<T>, GridError>
where
    T: GridCell,
    F: FnMut(Vector) -> T,
{
    let shape = GridShape::new(cols, rows)?;
    let mut cells: Vec<T> = shape.positions().map(&mut factory).collect();

    for (cell, pos) in cells.iter_mut().zip(shape.positions()) {
        for (delta, neighbour) in shape.neighbours(pos) {
            cell.link(delta, neighbour);
        }
    }

    debug!(cols, rows, cells = cells.len(), "grid generated");
    Ok(cells)
}

/// Apply `modify` to every cell with fewer than [`FULL_CONNECTIVITY`]
/// neighbours, i.e. the grid perimeter. Returns how many cells were
/// modified.
pub fn apply_boundary<T, F>(cells: &mut [T], mut modify: F) -> usize
where
    T: GridCell,
    F: FnMut(&mut T),
{
    let mut modified = 0;
    for cell in cells.iter_mut() {
        if cell.neighbour_count() < FULL_CONNECTIVITY {
            modify(cell);
            modified += 1;
        }
    }
    debug!(modified, "boundary pass applied");
    modified
}
