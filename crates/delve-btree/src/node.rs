//! The [`Behaviour`] trait, [`Status`], and closure leaves.

use std::fmt;

/// Outcome of ticking a [`Behaviour`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// Not finished; tick again later.
    Running,
    /// Finished and succeeded.
    Success,
    /// Finished and failed.
    Failure,
}

impl Status {
    /// Whether the node has finished, either way.
    pub fn is_done(self) -> bool {
        self != Status::Running
    }

    /// `Success` for `true`, `Failure` for `false`.
    pub fn from_bool(ok: bool) -> Self {
        if ok {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Running => "running",
            Status::Success => "success",
            Status::Failure => "failure",
        })
    }
}

/// A node in a behaviour tree.
///
/// `C` is the context every leaf mutates, `A` identifies the agent the
/// tree acts for (`()` when there is only one).
pub trait Behaviour<C, A = ()>: 'static {
    /// Tick this node once.
    fn run(&mut self, ctx: &mut C, agent: A) -> Status;

    /// Rewind to the initial state. Leaves are stateless by default.
    fn reset(&mut self) {}
}

/// An owned, type-erased behaviour.
pub type BoxedBehaviour<C, A = ()> = Box<dyn Behaviour<C, A>>;

impl<C: 'static, A: 'static> Behaviour<C, A> for BoxedBehaviour<C, A> {
    fn run(&mut self, ctx: &mut C, agent: A) -> Status {
        (**self).run(ctx, agent)
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Convenience adaptors for every [`Behaviour`].
pub trait BehaviourExt<C: 'static, A: 'static>: Behaviour<C, A> + Sized {
    /// Erase the node's type, for use as a composite child.
    fn boxed(self) -> BoxedBehaviour<C, A> {
        Box::new(self)
    }
}

impl<C: 'static, A: 'static, B: Behaviour<C, A>> BehaviourExt<C, A> for B {}

// ── Leaves ──────────────────────────────────────────────────────

/// Leaf whose closure reports its own [`Status`].
pub struct Action<F> {
    f: F,
}

/// Wrap `f` as an [`Action`].
pub fn action<F>(f: F) -> Action<F> {
    Action { f }
}

impl<C, A, F> Behaviour<C, A> for Action<F>
where
    F: FnMut(&mut C, A) -> Status + 'static,
{
    fn run(&mut self, ctx: &mut C, agent: A) -> Status {
        (self.f)(ctx, agent)
    }
}

/// Leaf that runs a closure and always succeeds.
pub struct Func<F> {
    f: F,
}

/// Wrap `f` as a [`Func`].
pub fn func<F>(f: F) -> Func<F> {
    Func { f }
}

impl<C, A, F> Behaviour<C, A> for Func<F>
where
    F: FnMut(&mut C, A) + 'static,
{
    fn run(&mut self, ctx: &mut C, agent: A) -> Status {
        (self.f)(ctx, agent);
        Status::Success
    }
}

/// Leaf that succeeds when its predicate holds and fails otherwise.
pub struct Conditional<F> {
    f: F,
}

/// Wrap `f` as a [`Conditional`].
pub fn condition<F>(f: F) -> Conditional<F> {
    Conditional { f }
}

impl<C, A, F> Behaviour<C, A> for Conditional<F>
where
    F: FnMut(&mut C, A) -> bool + 'static,
{
    fn run(&mut self, ctx: &mut C, agent: A) -> Status {
        Status::from_bool((self.f)(ctx, agent))
    }
}
