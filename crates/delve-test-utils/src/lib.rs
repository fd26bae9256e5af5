//! Test fixtures for delve development.
//!
//! Provides an [`EventLog`] recorder that attaches to actors and cells,
//! small world builders (open, fenced, ASCII maps) and a bare
//! [`LinkCell`] for driving the grid generator without a world.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    fenced_world, map_world, open_world, occupancy_violations, EventLog, LinkCell, Owner,
    Recorded, Recorder,
};
