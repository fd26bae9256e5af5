//! The two entity kinds: static [`Cell`]s and mobile [`Actor`]s.

use crate::component::{Component, Components};
use delve_core::{ActorId, CellId, Color, Glyph, Vector};
use smallvec::SmallVec;

/// Glyph of an open floor cell.
pub const FLOOR: Glyph = Glyph::ch('.');
/// Glyph of a wall cell.
pub const WALL: Glyph = Glyph::ch_fg('#', Color::White);

/// One grid position.
///
/// `passable` and `glyph` belong to content logic and may be changed
/// freely. The occupant changes only through [`World`](crate::World)
/// placement and movement, and the adjacency is fixed at generation.
#[derive(Debug)]
pub struct Cell {
    offset: Vector,
    /// Appearance when unoccupied.
    pub glyph: Glyph,
    /// Whether actors may enter.
    pub passable: bool,
    pub(crate) occupant: Option<ActorId>,
    pub(crate) adjacency: SmallVec<[(Vector, CellId); 8]>,
    pub(crate) components: Components<CellId>,
}

impl Cell {
    /// A cell at `offset` with the given appearance and passability.
    pub fn new(offset: Vector, glyph: Glyph, passable: bool) -> Self {
        Self {
            offset,
            glyph,
            passable,
            occupant: None,
            adjacency: SmallVec::new(),
            components: Components::new(),
        }
    }

    /// Open floor.
    pub fn floor(offset: Vector) -> Self {
        Self::new(offset, FLOOR, true)
    }

    /// Solid wall.
    pub fn wall(offset: Vector) -> Self {
        Self::new(offset, WALL, false)
    }

    /// Grid position of this cell.
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// The actor standing here, if any.
    pub fn occupant(&self) -> Option<ActorId> {
        self.occupant
    }

    /// The cell reached by one step of `delta`, if linked.
    pub fn neighbour(&self, delta: Vector) -> Option<CellId> {
        self.adjacency
            .iter()
            .find(|&&(d, _)| d == delta)
            .map(|&(_, id)| id)
    }

    /// All `(delta, neighbour)` links.
    pub fn adjacency(&self) -> impl Iterator<Item = (Vector, CellId)> + '_ {
        self.adjacency.iter().copied()
    }

    /// Number of linked neighbours.
    pub fn neighbour_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Attached components, in dispatch order.
    pub fn components(&self) -> &Components<CellId> {
        &self.components
    }

    /// Attach a component; it runs after those already attached.
    pub fn add_component(&mut self, component: impl Component<CellId>) {
        self.components.push(Box::new(component));
    }

    /// Builder form of [`add_component`](Self::add_component).
    pub fn with_component(mut self, component: impl Component<CellId>) -> Self {
        self.add_component(component);
        self
    }
}

/// A creature that occupies at most one cell.
#[derive(Debug, Default)]
pub struct Actor {
    /// Appearance.
    pub glyph: Glyph,
    pub(crate) position: Option<CellId>,
    pub(crate) components: Components<ActorId>,
}

impl Actor {
    /// An unplaced actor with the given appearance.
    pub fn new(glyph: Glyph) -> Self {
        Self {
            glyph,
            position: None,
            components: Components::new(),
        }
    }

    /// The cell this actor stands on, or `None` when off the grid.
    pub fn position(&self) -> Option<CellId> {
        self.position
    }

    /// Whether the actor is on the grid.
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Attached components, in dispatch order.
    pub fn components(&self) -> &Components<ActorId> {
        &self.components
    }

    /// Attach a component; it runs after those already attached.
    pub fn add_component(&mut self, component: impl Component<ActorId>) {
        self.components.push(Box::new(component));
    }

    /// Builder form of [`add_component`](Self::add_component).
    pub fn with_component(mut self, component: impl Component<ActorId>) -> Self {
        self.add_component(component);
        self
    }
}
