//! Grid generation for delve simulations.
//!
//! Builds the spatial substrate once per session: one cell per integer
//! position in `[0, cols) × [0, rows)`, wired with an 8-directional
//! (Moore) adjacency. The cell type is left to the caller through the
//! [`GridCell`] seam, so the same generator serves the world crate and
//! lightweight test cells alike.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod generate;
pub mod shape;

pub use error::GridError;
pub use generate::{apply_boundary, generate_grid, GridCell, FULL_CONNECTIVITY};
pub use shape::GridShape;
