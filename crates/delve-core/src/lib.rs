//! Core types for the delve simulation kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared by every other crate in the workspace:
//! grid vectors and compass tables, display glyphs, and the
//! strongly-typed handles used to address cells and actors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod glyph;
pub mod id;
pub mod vector;

pub use glyph::{Color, Glyph};
pub use id::{ActorId, CellId, TickId};
pub use vector::{Vector, DIRS_4, DIRS_8};
