//! Reusable world and component fixtures.
//!
//! - [`EventLog`] / [`Recorder`]: capture every event an entity receives.
//! - [`open_world`], [`fenced_world`], [`map_world`]: small worlds.
//! - [`occupancy_violations`]: audit both sides of the occupancy relation.
//! - [`LinkCell`]: minimal [`GridCell`] for generator tests and benches.

use delve_core::{ActorId, CellId, Vector};
use delve_grid::GridCell;
use delve_world::{Cell, Component, Event, World, WorldConfig, WALL};
use std::cell::RefCell;
use std::rc::Rc;

// ── Event recording ─────────────────────────────────────────────

/// Which entity received a recorded event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Actor(ActorId),
    Cell(CellId),
}

/// One captured delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recorded {
    pub tag: &'static str,
    pub owner: Owner,
    pub event: Event,
}

/// Shared, append-only log of deliveries.
///
/// Clones share storage, so a test keeps one handle and hands
/// [`recorder`](EventLog::recorder)s to the entities under test.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: Rc<RefCell<Vec<Recorded>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A component that appends to this log under `tag`.
    pub fn recorder(&self, tag: &'static str) -> Recorder {
        Recorder {
            tag,
            log: self.clone(),
        }
    }

    pub fn entries(&self) -> Vec<Recorded> {
        self.entries.borrow().clone()
    }

    /// `"tag:kind"` for every entry, in delivery order.
    pub fn summary(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|r| format!("{}:{}", r.tag, r.event.kind()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    fn push(&self, tag: &'static str, owner: Owner, event: &Event) {
        self.entries.borrow_mut().push(Recorded {
            tag,
            owner,
            event: event.clone(),
        });
    }
}

/// Component that records each event it sees. Attaches to actors and
/// cells alike.
pub struct Recorder {
    tag: &'static str,
    log: EventLog,
}

impl Component<ActorId> for Recorder {
    fn name(&self) -> &str {
        self.tag
    }

    fn handle(&mut self, _: &mut World, owner: ActorId, event: &mut Event) {
        self.log.push(self.tag, Owner::Actor(owner), event);
    }
}

impl Component<CellId> for Recorder {
    fn name(&self) -> &str {
        self.tag
    }

    fn handle(&mut self, _: &mut World, owner: CellId, event: &mut Event) {
        self.log.push(self.tag, Owner::Cell(owner), event);
    }
}

// ── Worlds ──────────────────────────────────────────────────────

/// All-floor world, no fence.
pub fn open_world(cols: u32, rows: u32) -> World {
    World::generate(&WorldConfig::new(cols, rows), |pos, _| Cell::floor(pos), |_| {})
        .expect("valid test dimensions")
}

/// Floor world whose perimeter is walled off.
pub fn fenced_world(cols: u32, rows: u32, seed: u64) -> World {
    let config = WorldConfig::new(cols, rows).with_seed(seed);
    World::generate(&config, |pos, _| Cell::floor(pos), |c| {
        c.passable = false;
        c.glyph = WALL;
    })
    .expect("valid test dimensions")
}

/// World from an ASCII map: `#` is wall, anything else floor. Each
/// string is one row (y), each character one column (x).
pub fn map_world(rows: &[&str]) -> World {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
    assert!(
        rows.iter().all(|r| r.chars().count() as u32 == width),
        "ragged map"
    );
    let grid: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
    World::generate(
        &WorldConfig::new(width, height),
        |pos, _| match grid[pos.y as usize][pos.x as usize] {
            '#' => Cell::wall(pos),
            _ => Cell::floor(pos),
        },
        |_| {},
    )
    .expect("valid test map")
}

/// Every place where the two sides of the occupancy relation disagree.
/// Empty for a consistent world.
pub fn occupancy_violations(world: &World) -> Vec<String> {
    let mut out = Vec::new();
    for (id, actor) in world.actors() {
        if let Some(cell) = actor.position() {
            let occupant = world.cell(cell).and_then(|c| c.occupant());
            if occupant != Some(id) {
                out.push(format!("{id} on {cell} but {cell} holds {occupant:?}"));
            }
        }
    }
    for (id, cell) in world.cells() {
        if let Some(actor) = cell.occupant() {
            let position = world.actor(actor).and_then(|a| a.position());
            if position != Some(id) {
                out.push(format!("{id} holds {actor} but {actor} is at {position:?}"));
            }
        }
    }
    out
}

// ── Grid stub ───────────────────────────────────────────────────

/// Bare grid cell: remembers its offset and links.
#[derive(Clone, Debug, Default)]
pub struct LinkCell {
    pub offset: Vector,
    pub links: Vec<(Vector, CellId)>,
    pub marked: bool,
}

impl LinkCell {
    pub fn at(offset: Vector) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }
}

impl GridCell for LinkCell {
    fn link(&mut self, delta: Vector, neighbour: CellId) {
        self.links.push((delta, neighbour));
    }

    fn neighbour_count(&self) -> usize {
        self.links.len()
    }
}
