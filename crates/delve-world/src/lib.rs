//! Entity, component and event core for delve simulations.
//!
//! A [`World`] owns a generated grid of [`Cell`]s, the [`Actor`]s that
//! walk it, a [`DeltaClock`](delve_clock::DeltaClock) deciding who acts
//! next, and the [`Random`](delve_rand::Random) stream everything draws
//! from. Entities talk through [`Event`]s: each one is handled by the
//! entity's built-in logic and then broadcast to its [`Component`]s in
//! attachment order.
//!
//! # Movement
//!
//! Sending [`Event::Move`] to an actor resolves to exactly one
//! [`MoveOutcome`]:
//!
//! 1. no link in that direction: nothing happens;
//! 2. impassable destination: the actor receives [`Event::Collide`];
//! 3. occupied destination: the actor receives [`Event::Bump`];
//! 4. otherwise the source cell, destination cell and actor are updated
//!    together, then notified with [`Event::OccupantChanged`] (source,
//!    destination) and [`Event::PositionChanged`].
//!
//! # Behaviours
//!
//! [`Combatant`] and [`Wander`] are stock components. [`Brain`] runs a
//! [`delve_btree`] tree over `(World, ActorId)` once per turn, with
//! [`walk`] as the movement leaf.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod behaviour;
pub mod component;
pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod world;

pub use behaviour::{walk, Brain, Combatant, Wander};
pub use component::{Component, Components, FnComponent};
pub use config::WorldConfig;
pub use entity::{Actor, Cell, FLOOR, WALL};
pub use error::{ConfigError, WorldError};
pub use event::{Event, Query};
pub use world::{MoveCounts, MoveOutcome, StepReport, World};
