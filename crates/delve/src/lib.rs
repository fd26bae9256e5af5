//! Delve: a simulation kernel for turn-based grid-world games.
//!
//! This is the facade crate that re-exports the public API of every
//! delve sub-crate. Rendering, input and the outer game loop are left
//! to the embedding application.
//!
//! # Quick start
//!
//! ```rust
//! use delve::prelude::*;
//!
//! let config = WorldConfig::new(10, 6).with_seed(42);
//! let mut world = World::generate(&config, |pos, _| Cell::floor(pos), |c| {
//!     c.passable = false;
//!     c.glyph = WALL;
//! })
//! .unwrap();
//!
//! let bat = Actor::new(Glyph::ch('b')).with_component(Wander::new(1, 2).unwrap());
//! let id = world.spawn_at(bat, Vector::new(4, 3)).unwrap();
//! world.schedule(id, 1).unwrap();
//!
//! let report = world.step();
//! assert_eq!(report.acted, vec![id]);
//! assert_eq!(report.moves.total(), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `delve-core` | `Vector`, compass tables, `Glyph`, ids |
//! | [`rand`] | `delve-rand` | Seedable random source |
//! | [`clock`] | `delve-clock` | Delta-clock scheduler |
//! | [`grid`] | `delve-grid` | Grid generation and boundary pass |
//! | [`btree`] | `delve-btree` | Behaviour trees |
//! | [`world`] | `delve-world` | Entities, components, events, movement, `Brain` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Value types and handles (`delve-core`).
pub use delve_core as types;

/// Seedable deterministic random source (`delve-rand`).
///
/// [`rand::Random`] is the entry point; it also implements
/// `rand::RngCore` for use with the wider `rand` ecosystem.
pub use delve_rand as rand;

/// Delta-clock scheduling (`delve-clock`).
pub use delve_clock as clock;

/// Adjacency-linked grid generation (`delve-grid`).
///
/// [`World::generate`](world::World::generate) drives this for you; use
/// it directly to build grids of your own cell type via
/// [`grid::GridCell`].
pub use delve_grid as grid;

/// Behaviour trees (`delve-btree`), driven per actor by
/// [`world::Brain`].
pub use delve_btree as btree;

/// Entity, component and event core (`delve-world`).
pub use delve_world as world;

/// Common imports for typical delve usage.
///
/// ```rust
/// use delve::prelude::*;
/// ```
pub mod prelude {
    // Value types
    pub use delve_core::{ActorId, CellId, Color, Glyph, TickId, Vector, DIRS_4, DIRS_8};

    // Randomness and time
    pub use delve_clock::DeltaClock;
    pub use delve_rand::{Random, RandomError};

    // Grid
    pub use delve_grid::GridError;

    // Behaviour trees
    pub use delve_btree::{Behaviour, BehaviourExt, Selection, Sequence, Status};

    // World
    pub use delve_world::{
        walk, Actor, Brain, Cell, Combatant, Component, ConfigError, Event, FnComponent, MoveOutcome, Query,
        StepReport, Wander, World, WorldConfig, WorldError, FLOOR, WALL,
    };
}
