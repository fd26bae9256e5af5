//! Decorators: nodes that rewrite the status of a single child.

use crate::node::{Behaviour, Status};
use tracing::trace;

/// How a [`Decorator`] rewrites its child's status.
///
/// | Kind | Success | Failure | Running |
/// |------|---------|---------|---------|
/// | `Invert` | Failure | Success | Running |
/// | `Repeat` | reset, Running | reset, Running | Running |
/// | `ForceSuccess` | Success | Success | Running |
/// | `ForceFailure` | Failure | Failure | Running |
/// | `Until` | Success | reset, Running | Running |
/// | `While` | reset, Running | Failure | Running |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecoratorKind {
    /// Swap success and failure.
    Invert,
    /// Run forever, restarting the child whenever it finishes.
    Repeat,
    /// Report failure as success.
    ForceSuccess,
    /// Report success as failure.
    ForceFailure,
    /// Restart the child until it succeeds.
    Until,
    /// Restart the child until it fails.
    While,
}

/// A single child plus a status rewrite.
pub struct Decorator<B> {
    kind: DecoratorKind,
    node: B,
}

impl<B> Decorator<B> {
    /// Wrap `node`.
    pub fn new(kind: DecoratorKind, node: B) -> Self {
        Self { kind, node }
    }

    /// The rewrite applied.
    pub fn kind(&self) -> DecoratorKind {
        self.kind
    }

    /// The wrapped node.
    pub fn inner(&self) -> &B {
        &self.node
    }
}

impl<C, A, B: Behaviour<C, A>> Behaviour<C, A> for Decorator<B> {
    fn run(&mut self, ctx: &mut C, agent: A) -> Status {
        use DecoratorKind::*;
        use Status::*;

        let status = self.node.run(ctx, agent);
        let (out, restart) = match (self.kind, status) {
            (_, Running) => (Running, false),
            (Invert, Success) => (Failure, false),
            (Invert, Failure) => (Success, false),
            (Repeat, _) => (Running, true),
            (ForceSuccess, _) => (Success, false),
            (ForceFailure, _) => (Failure, false),
            (Until, Success) => (Success, false),
            (Until, Failure) => (Running, true),
            (While, Success) => (Running, true),
            (While, Failure) => (Failure, false),
        };
        if restart {
            trace!(kind = ?self.kind, child = %status, "restarting child");
            self.node.reset();
        }
        out
    }

    fn reset(&mut self) {
        self.node.reset();
    }
}

/// Swap the child's success and failure.
pub fn invert<B>(node: B) -> Decorator<B> {
    Decorator::new(DecoratorKind::Invert, node)
}

/// Tick the child forever, resetting it each time it finishes.
pub fn repeat<B>(node: B) -> Decorator<B> {
    Decorator::new(DecoratorKind::Repeat, node)
}

/// Treat the child's failure as success.
pub fn force_success<B>(node: B) -> Decorator<B> {
    Decorator::new(DecoratorKind::ForceSuccess, node)
}

/// Treat the child's success as failure.
pub fn force_failure<B>(node: B) -> Decorator<B> {
    Decorator::new(DecoratorKind::ForceFailure, node)
}

/// Retry the child until it succeeds.
pub fn until<B>(node: B) -> Decorator<B> {
    Decorator::new(DecoratorKind::Until, node)
}

/// Keep re-running the child while it succeeds.
pub fn while_<B>(node: B) -> Decorator<B> {
    Decorator::new(DecoratorKind::While, node)
}
