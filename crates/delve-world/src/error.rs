//! Error types for world operations and configuration.

use delve_core::{ActorId, CellId, Vector};
use delve_grid::GridError;
use std::error::Error;
use std::fmt;

/// Errors from [`World`](crate::World) placement and scheduling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldError {
    /// The actor handle does not belong to this world.
    UnknownActor {
        /// The offending handle.
        actor: ActorId,
    },
    /// The cell handle does not belong to this world.
    UnknownCell {
        /// The offending handle.
        cell: CellId,
    },
    /// The position lies outside the grid.
    OutOfBounds {
        /// The offending position.
        pos: Vector,
    },
    /// Another actor already stands on the cell.
    CellOccupied {
        /// The target cell.
        cell: CellId,
        /// Its current occupant.
        occupant: ActorId,
    },
    /// A delay range with `min > max`.
    InvalidDelayRange {
        /// Lower bound.
        min: u64,
        /// Upper bound.
        max: u64,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownActor { actor } => write!(f, "{actor} does not exist"),
            Self::UnknownCell { cell } => write!(f, "{cell} does not exist"),
            Self::OutOfBounds { pos } => write!(f, "position {pos} is outside the grid"),
            Self::CellOccupied { cell, occupant } => {
                write!(f, "{cell} is already occupied by {occupant}")
            }
            Self::InvalidDelayRange { min, max } => {
                write!(f, "delay range {min}..={max} is empty")
            }
        }
    }
}

impl Error for WorldError {}

/// Errors detected by [`WorldConfig::validate()`](crate::WorldConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid dimensions are invalid.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
