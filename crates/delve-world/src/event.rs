//! The event sum type and query response slots.

use delve_core::{ActorId, CellId, Glyph, Vector};

/// A writable response slot carried by query events.
///
/// The sender creates an empty query, dispatches it, then reads the
/// slot. Any handler may [`answer`](Query::answer); later answers
/// overwrite earlier ones, so the last handler to run wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query<T> {
    response: Option<T>,
}

impl<T> Query<T> {
    /// An unanswered query.
    pub fn new() -> Self {
        Self { response: None }
    }

    /// Set (or replace) the response.
    pub fn answer(&mut self, value: T) {
        self.response = Some(value);
    }

    /// The current response, if any handler answered.
    pub fn response(&self) -> Option<&T> {
        self.response.as_ref()
    }

    /// Whether any handler answered.
    pub fn is_answered(&self) -> bool {
        self.response.is_some()
    }

    /// Consume the query, yielding the response.
    pub fn into_response(self) -> Option<T> {
        self.response
    }
}

/// A message delivered to an actor or a cell.
///
/// Every event is broadcast to the entity's built-in handling and then
/// to each attached component. Components match on the variants they
/// care about and ignore the rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The actor's scheduled turn has come.
    Act,
    /// Attempt to move the actor by one step of `delta`.
    Move {
        /// Direction of travel.
        delta: Vector,
    },
    /// A move was blocked by another actor.
    Bump {
        /// The occupant of the destination cell.
        bumped: ActorId,
    },
    /// A move was blocked by an impassable cell.
    Collide {
        /// The cell that blocked the move.
        obstacle: CellId,
    },
    /// The actor's position changed. Sent after the change is complete.
    PositionChanged {
        /// Previous cell.
        from: Option<CellId>,
        /// New cell.
        to: Option<CellId>,
    },
    /// The cell's occupant changed. Sent after the change is complete.
    OccupantChanged {
        /// Previous occupant.
        from: Option<ActorId>,
        /// New occupant.
        to: Option<ActorId>,
    },
    /// Harm dealt to the actor.
    Damage {
        /// Hit points removed.
        amount: i32,
        /// Who dealt it, if anyone.
        source: Option<ActorId>,
    },
    /// Ask for the glyph to display.
    Glyph(Query<Glyph>),
}

impl Event {
    /// Short variant name, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Act => "act",
            Self::Move { .. } => "move",
            Self::Bump { .. } => "bump",
            Self::Collide { .. } => "collide",
            Self::PositionChanged { .. } => "position_changed",
            Self::OccupantChanged { .. } => "occupant_changed",
            Self::Damage { .. } => "damage",
            Self::Glyph(_) => "glyph",
        }
    }
}
