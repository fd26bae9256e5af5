//! The [`World`] arena: entity storage, dispatch, movement and stepping.
//!
//! Cells and actors live in two vectors addressed by [`CellId`] and
//! [`ActorId`]. The occupancy relation is stored on both sides
//! (`cell.occupant` and `actor.position`) and only this module writes
//! either side, always both together.

use crate::config::WorldConfig;
use crate::entity::{Actor, Cell};
use crate::error::{ConfigError, WorldError};
use crate::event::{Event, Query};
use delve_clock::DeltaClock;
use delve_core::{ActorId, CellId, Glyph, TickId, Vector};
use delve_grid::{apply_boundary, generate_grid, GridCell, GridShape};
use delve_rand::Random;
use tracing::{debug, trace};

// ── Movement outcomes ───────────────────────────────────────────

/// What a single move attempt did. Exactly one of these happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No link in that direction, or the actor is off the grid.
    NoOp,
    /// The destination is impassable.
    Collided {
        /// The blocking cell.
        obstacle: CellId,
    },
    /// The destination is occupied.
    Bumped {
        /// The occupant.
        bumped: ActorId,
    },
    /// The actor relocated.
    Moved {
        /// Previous cell.
        from: CellId,
        /// New cell.
        to: CellId,
    },
}

/// Tally of move outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveCounts {
    /// [`MoveOutcome::NoOp`] count.
    pub no_op: u32,
    /// [`MoveOutcome::Collided`] count.
    pub collided: u32,
    /// [`MoveOutcome::Bumped`] count.
    pub bumped: u32,
    /// [`MoveOutcome::Moved`] count.
    pub moved: u32,
}

impl MoveCounts {
    /// Count one outcome.
    pub fn record(&mut self, outcome: &MoveOutcome) {
        match outcome {
            MoveOutcome::NoOp => self.no_op += 1,
            MoveOutcome::Collided { .. } => self.collided += 1,
            MoveOutcome::Bumped { .. } => self.bumped += 1,
            MoveOutcome::Moved { .. } => self.moved += 1,
        }
    }

    /// Total attempts counted.
    pub fn total(&self) -> u32 {
        self.no_op + self.collided + self.bumped + self.moved
    }
}

// ── StepReport ──────────────────────────────────────────────────

/// Result of one [`World::step()`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// The tick just completed.
    pub tick: TickId,
    /// Actors that received [`Event::Act`], in dispatch order.
    pub acted: Vec<ActorId>,
    /// Move attempts made during the step, including nested ones.
    pub moves: MoveCounts,
}

// ── World ───────────────────────────────────────────────────────

/// Adapter that lets the grid generator wire a [`Cell`]'s adjacency
/// without exposing a public way to relink it later.
struct Linking(Cell);

impl GridCell for Linking {
    fn link(&mut self, delta: Vector, neighbour: CellId) {
        self.0.adjacency.push((delta, neighbour));
    }

    fn neighbour_count(&self) -> usize {
        self.0.adjacency.len()
    }
}

/// A single simulation stream: grid, actors, clock and random source.
///
/// Everything runs synchronously on the caller's thread. A move, with
/// every sub-event it triggers, completes before the call that caused it
/// returns.
#[derive(Debug)]
pub struct World {
    shape: GridShape,
    cells: Vec<Cell>,
    actors: Vec<Actor>,
    clock: DeltaClock<ActorId>,
    rng: Random,
    tick: TickId,
    moves: MoveCounts,
}

impl World {
    /// Build a world from `config`.
    ///
    /// Seeds the random stream, builds the grid by calling `tile` once
    /// per position (with the stream, so terrain can vary), then calls
    /// `fence` on every cell with fewer than eight neighbours.
    pub fn generate<T, F>(config: &WorldConfig, mut tile: T, mut fence: F) -> Result<Self, ConfigError>
    where
        T: FnMut(Vector, &mut Random) -> Cell,
        F: FnMut(&mut Cell),
    {
        let shape = config.shape()?;
        let mut rng = Random::seeded(config.seed);
        let mut linked = generate_grid(shape.cols(), shape.rows(), |pos| {
            Linking(tile(pos, &mut rng))
        })?;
        let fenced = apply_boundary(&mut linked, |l| fence(&mut l.0));
        debug!(
            cols = shape.cols(),
            rows = shape.rows(),
            seed = config.seed,
            fenced,
            "world generated"
        );
        Ok(Self {
            shape,
            cells: linked.into_iter().map(|l| l.0).collect(),
            actors: Vec::new(),
            clock: DeltaClock::new(),
            rng,
            tick: TickId::default(),
            moves: MoveCounts::default(),
        })
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Grid dimensions.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// The cell with handle `id`.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    /// Mutable access to a cell's content state (glyph, passability,
    /// components).
    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(id.index())
    }

    /// Handle of the cell at `pos`.
    pub fn cell_at(&self, pos: Vector) -> Option<CellId> {
        self.shape.id_of(pos)
    }

    /// All cells with their handles.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (CellId(i as u32), c))
    }

    /// The actor with handle `id`.
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.index())
    }

    /// Mutable access to an actor's content state (glyph, components).
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id.index())
    }

    /// All actors ever spawned, placed or not.
    pub fn actors(&self) -> impl Iterator<Item = (ActorId, &Actor)> + '_ {
        self.actors
            .iter()
            .enumerate()
            .map(|(i, a)| (ActorId(i as u32), a))
    }

    /// Number of actors ever spawned.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// The scheduler.
    pub fn clock(&self) -> &DeltaClock<ActorId> {
        &self.clock
    }

    /// The world's random stream.
    pub fn rng_mut(&mut self) -> &mut Random {
        &mut self.rng
    }

    /// Ticks completed so far.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Add an actor to the world, off the grid.
    ///
    /// # Panics
    ///
    /// Panics if the world already holds `u32::MAX` actors.
    pub fn spawn(&mut self, actor: Actor) -> ActorId {
        assert!(
            self.actors.len() < u32::MAX as usize,
            "actor handle space exhausted"
        );
        let id = ActorId(self.actors.len() as u32);
        self.actors.push(actor);
        trace!(actor = %id, "spawned");
        id
    }

    /// Spawn `actor` and place it on the cell at `pos`.
    ///
    /// Nothing is spawned if the position is invalid or occupied.
    pub fn spawn_at(&mut self, actor: Actor, pos: Vector) -> Result<ActorId, WorldError> {
        let cell = self.cell_at(pos).ok_or(WorldError::OutOfBounds { pos })?;
        if let Some(occupant) = self.cells[cell.index()].occupant {
            return Err(WorldError::CellOccupied { cell, occupant });
        }
        let id = self.spawn(actor);
        self.place(id, cell)?;
        Ok(id)
    }

    /// Put `actor` on `cell`, lifting it from its current cell if placed.
    ///
    /// Both sides of the occupancy relation are written before any
    /// notification is sent.
    pub fn place(&mut self, actor: ActorId, cell: CellId) -> Result<(), WorldError> {
        self.check_actor(actor)?;
        self.check_cell(cell)?;
        match self.cells[cell.index()].occupant {
            Some(o) if o == actor => return Ok(()),
            Some(occupant) => return Err(WorldError::CellOccupied { cell, occupant }),
            None => {}
        }

        let from = self.actors[actor.index()].position;
        if let Some(prev) = from {
            self.cells[prev.index()].occupant = None;
        }
        self.cells[cell.index()].occupant = Some(actor);
        self.actors[actor.index()].position = Some(cell);

        if let Some(prev) = from {
            self.send_cell(prev, &mut vacated(actor));
        }
        self.send_cell(cell, &mut entered(actor));
        self.send_actor(
            actor,
            &mut Event::PositionChanged {
                from,
                to: Some(cell),
            },
        );
        Ok(())
    }

    /// Take `actor` off the grid and off the clock.
    ///
    /// Returns the cell it stood on. The actor record itself stays in
    /// the arena, so its handle remains valid and it may be placed again.
    pub fn remove(&mut self, actor: ActorId) -> Result<Option<CellId>, WorldError> {
        self.check_actor(actor)?;
        self.clock.unschedule(&actor);
        let Some(cell) = self.actors[actor.index()].position.take() else {
            return Ok(None);
        };
        self.cells[cell.index()].occupant = None;
        debug!(actor = %actor, cell = %cell, "actor removed");

        self.send_cell(cell, &mut vacated(actor));
        self.send_actor(
            actor,
            &mut Event::PositionChanged {
                from: Some(cell),
                to: None,
            },
        );
        Ok(Some(cell))
    }

    // ── Scheduling ──────────────────────────────────────────────

    /// Schedule `actor` to act after `delay` steps, replacing any
    /// pending turn. A delay of 0 acts on the next step.
    pub fn schedule(&mut self, actor: ActorId, delay: u64) -> Result<(), WorldError> {
        self.check_actor(actor)?;
        self.clock.schedule(actor, delay);
        Ok(())
    }

    /// Cancel `actor`'s pending turn. Returns whether one existed.
    pub fn unschedule(&mut self, actor: ActorId) -> bool {
        self.clock.unschedule(&actor)
    }

    /// Advance one tick: every actor now due and still on the grid
    /// receives [`Event::Act`].
    ///
    /// Actors come due in an unspecified (but reproducible) order.
    /// Actors that left the grid earlier in the same tick are skipped.
    pub fn step(&mut self) -> StepReport {
        self.tick = self.tick.next();
        self.moves = MoveCounts::default();

        let due = self.clock.advance();
        let mut acted = Vec::with_capacity(due.len());
        for id in due {
            if !self.actors[id.index()].is_placed() {
                trace!(actor = %id, "skipping unplaced actor");
                continue;
            }
            self.send_actor(id, &mut Event::Act);
            acted.push(id);
        }

        let moves = std::mem::take(&mut self.moves);
        trace!(
            tick = %self.tick,
            acted = acted.len(),
            moved = moves.moved,
            "step complete"
        );
        StepReport {
            tick: self.tick,
            acted,
            moves,
        }
    }

    // ── Dispatch ────────────────────────────────────────────────

    /// Deliver `event` to an actor: built-in handling first, then every
    /// component in attachment order.
    ///
    /// Built-in handling answers [`Event::Glyph`] with the actor's glyph
    /// and performs [`Event::Move`].
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this world.
    pub fn send_actor(&mut self, id: ActorId, event: &mut Event) {
        match event {
            Event::Glyph(q) => q.answer(self.actors[id.index()].glyph),
            Event::Move { delta } => {
                let delta = *delta;
                self.attempt_move(id, delta);
            }
            _ => {}
        }
        self.run_actor_components(id, event);
    }

    /// Deliver `event` to a cell: built-in handling first, then every
    /// component in attachment order.
    ///
    /// Built-in handling answers [`Event::Glyph`] with the cell's glyph
    /// and then forwards the query to the occupant, so an occupied cell
    /// shows its occupant.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this world.
    pub fn send_cell(&mut self, id: CellId, event: &mut Event) {
        let forward = match event {
            Event::Glyph(q) => {
                let cell = &self.cells[id.index()];
                q.answer(cell.glyph);
                cell.occupant
            }
            _ => None,
        };
        if let Some(occupant) = forward {
            self.send_actor(occupant, event);
        }
        self.run_cell_components(id, event);
    }

    /// Attempt one step of `delta` and report what happened.
    ///
    /// Equivalent to sending [`Event::Move`], with the outcome returned.
    pub fn move_actor(&mut self, id: ActorId, delta: Vector) -> MoveOutcome {
        let outcome = self.attempt_move(id, delta);
        self.run_actor_components(id, &mut Event::Move { delta });
        outcome
    }

    /// What an actor looks like.
    pub fn glyph_of_actor(&mut self, id: ActorId) -> Glyph {
        let mut event = Event::Glyph(Query::new());
        self.send_actor(id, &mut event);
        glyph_response(event)
    }

    /// What a cell looks like: its occupant's glyph if occupied.
    pub fn glyph_of_cell(&mut self, id: CellId) -> Glyph {
        let mut event = Event::Glyph(Query::new());
        self.send_cell(id, &mut event);
        glyph_response(event)
    }

    fn run_actor_components(&mut self, id: ActorId, event: &mut Event) {
        let count = self.actors[id.index()].components.len();
        for i in 0..count {
            let Some(mut component) = self.actors[id.index()].components.take(i) else {
                continue;
            };
            component.handle(self, id, event);
            self.actors[id.index()].components.restore(i, component);
        }
    }

    fn run_cell_components(&mut self, id: CellId, event: &mut Event) {
        let count = self.cells[id.index()].components.len();
        for i in 0..count {
            let Some(mut component) = self.cells[id.index()].components.take(i) else {
                continue;
            };
            component.handle(self, id, event);
            self.cells[id.index()].components.restore(i, component);
        }
    }

    // ── Movement ────────────────────────────────────────────────

    fn attempt_move(&mut self, id: ActorId, delta: Vector) -> MoveOutcome {
        let outcome = self.resolve_move(id, delta);
        self.moves.record(&outcome);
        trace!(actor = %id, %delta, ?outcome, "move");

        match outcome {
            MoveOutcome::NoOp => {}
            MoveOutcome::Collided { obstacle } => {
                self.send_actor(id, &mut Event::Collide { obstacle });
            }
            MoveOutcome::Bumped { bumped } => {
                self.send_actor(id, &mut Event::Bump { bumped });
            }
            MoveOutcome::Moved { from, to } => {
                self.send_cell(from, &mut vacated(id));
                self.send_cell(to, &mut entered(id));
                self.send_actor(
                    id,
                    &mut Event::PositionChanged {
                        from: Some(from),
                        to: Some(to),
                    },
                );
            }
        }
        outcome
    }

    /// Decide the outcome and, on success, rewrite occupancy. Sends no
    /// events.
    fn resolve_move(&mut self, id: ActorId, delta: Vector) -> MoveOutcome {
        let Some(src) = self.actors[id.index()].position else {
            return MoveOutcome::NoOp;
        };
        let Some(dst) = self.cells[src.index()].neighbour(delta) else {
            return MoveOutcome::NoOp;
        };
        let target = &self.cells[dst.index()];
        if !target.passable {
            return MoveOutcome::Collided { obstacle: dst };
        }
        if let Some(bumped) = target.occupant {
            return MoveOutcome::Bumped { bumped };
        }

        self.cells[src.index()].occupant = None;
        self.cells[dst.index()].occupant = Some(id);
        self.actors[id.index()].position = Some(dst);
        MoveOutcome::Moved { from: src, to: dst }
    }

    fn check_actor(&self, actor: ActorId) -> Result<(), WorldError> {
        if actor.index() < self.actors.len() {
            Ok(())
        } else {
            Err(WorldError::UnknownActor { actor })
        }
    }

    fn check_cell(&self, cell: CellId) -> Result<(), WorldError> {
        if cell.index() < self.cells.len() {
            Ok(())
        } else {
            Err(WorldError::UnknownCell { cell })
        }
    }
}

fn vacated(actor: ActorId) -> Event {
    Event::OccupantChanged {
        from: Some(actor),
        to: None,
    }
}

fn entered(actor: ActorId) -> Event {
    Event::OccupantChanged {
        from: None,
        to: Some(actor),
    }
}

/// The answered glyph, or the blank default if nobody answered (or a
/// component replaced the query).
fn glyph_response(event: Event) -> Glyph {
    match event {
        Event::Glyph(q) => q.into_response().unwrap_or_default(),
        _ => Glyph::default(),
    }
}
