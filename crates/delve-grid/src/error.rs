//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to build a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"cols"` or `"rows"`).
        name: &'static str,
        /// The value given.
        value: u32,
        /// The largest value supported.
        max: u32,
    },
    /// `cols * rows` does not fit the cell handle range.
    TooManyCells {
        /// Columns requested.
        cols: u32,
        /// Rows requested.
        rows: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum {max}")
            }
            Self::TooManyCells { cols, rows } => {
                write!(f, "grid of {cols}x{rows} cells exceeds the cell id range")
            }
        }
    }
}

impl std::error::Error for GridError {}
