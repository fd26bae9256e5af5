//! World configuration and validation.

use crate::error::ConfigError;
use delve_grid::GridShape;

/// Parameters for [`World::generate`](crate::World::generate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Grid width.
    pub cols: u32,
    /// Grid height.
    pub rows: u32,
    /// Seed for the world's random stream.
    pub seed: u64,
}

impl WorldConfig {
    /// A `cols × rows` world with seed 0.
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            seed: 0,
        }
    }

    /// Replace the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check structural invariants.
    ///
    /// Both dimensions must be non-zero and fit an `i32` axis, and the
    /// cell count must fit a cell handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shape().map(|_| ())
    }

    pub(crate) fn shape(&self) -> Result<GridShape, ConfigError> {
        Ok(GridShape::new(self.cols, self.rows)?)
    }
}

impl Default for WorldConfig {
    /// A classic 80×24 terminal-sized map, seed 0.
    fn default() -> Self {
        Self::new(80, 24)
    }
}
