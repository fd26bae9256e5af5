//! Composite nodes: [`Sequence`] and [`Selection`].

use crate::node::{Behaviour, BoxedBehaviour, Status};

/// Children plus the index of the child to tick next.
struct Children<C, A> {
    nodes: Vec<BoxedBehaviour<C, A>>,
    index: usize,
}

impl<C: 'static, A: 'static> Children<C, A> {
    fn new(nodes: Vec<BoxedBehaviour<C, A>>) -> Self {
        Self { nodes, index: 0 }
    }

    /// Tick children from the current index. `Running` pauses on the
    /// current child; `stop` ends the walk with that status; any other
    /// status moves on. Falls through to `exhausted`.
    fn walk(&mut self, ctx: &mut C, agent: A, stop: Status, exhausted: Status) -> Status
    where
        A: Copy,
    {
        while let Some(node) = self.nodes.get_mut(self.index) {
            match node.run(ctx, agent) {
                Status::Running => return Status::Running,
                s if s == stop => return stop,
                _ => self.index += 1,
            }
        }
        exhausted
    }

    fn reset(&mut self) {
        self.index = 0;
        for node in &mut self.nodes {
            node.reset();
        }
    }
}

/// Conjunction: succeeds once every child has succeeded, in order, and
/// fails as soon as one child fails. An empty sequence succeeds.
pub struct Sequence<C, A = ()> {
    children: Children<C, A>,
}

impl<C: 'static, A: 'static> Sequence<C, A> {
    /// A sequence over `nodes`, ticked left to right.
    pub fn new(nodes: Vec<BoxedBehaviour<C, A>>) -> Self {
        Self {
            children: Children::new(nodes),
        }
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.nodes.len()
    }

    /// Whether there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.nodes.is_empty()
    }
}

impl<C: 'static, A: Copy + 'static> Behaviour<C, A> for Sequence<C, A> {
    fn run(&mut self, ctx: &mut C, agent: A) -> Status {
        self.children
            .walk(ctx, agent, Status::Failure, Status::Success)
    }

    fn reset(&mut self) {
        self.children.reset();
    }
}

/// Disjunction: succeeds as soon as one child succeeds, and fails once
/// every child has failed. An empty selection fails.
pub struct Selection<C, A = ()> {
    children: Children<C, A>,
}

impl<C: 'static, A: 'static> Selection<C, A> {
    /// A selection over `nodes`, tried left to right.
    pub fn new(nodes: Vec<BoxedBehaviour<C, A>>) -> Self {
        Self {
            children: Children::new(nodes),
        }
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.nodes.len()
    }

    /// Whether there are no children.
    pub fn is_empty(&self) -> bool {
        self.children.nodes.is_empty()
    }
}

impl<C: 'static, A: Copy + 'static> Behaviour<C, A> for Selection<C, A> {
    fn run(&mut self, ctx: &mut C, agent: A) -> Status {
        self.children
            .walk(ctx, agent, Status::Success, Status::Failure)
    }

    fn reset(&mut self) {
        self.children.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{action, BehaviourExt};
    use std::collections::VecDeque;

    /// Leaf replaying a fixed list of statuses, one per tick.
    fn scripted(states: &[Status]) -> BoxedBehaviour<()> {
        let mut script: VecDeque<Status> = states.iter().copied().collect();
        action(move |_: &mut (), ()| script.pop_front().expect("script exhausted")).boxed()
    }

    fn ticks(node: &mut impl Behaviour<()>, n: usize) -> Vec<Status> {
        (0..n).map(|_| node.run(&mut (), ())).collect()
    }

    use Status::{Failure, Running, Success};

    // ── Sequence ────────────────────────────────────────────────

    #[test]
    fn sequence_succeeds_after_every_child() {
        let mut seq = Sequence::new(vec![
            scripted(&[Running, Success]),
            scripted(&[Running, Success]),
            scripted(&[Success]),
        ]);
        assert_eq!(ticks(&mut seq, 3), vec![Running, Running, Success]);
    }

    #[test]
    fn sequence_stops_at_first_failure() {
        let mut seq = Sequence::new(vec![
            scripted(&[Running, Success]),
            scripted(&[Running, Running, Failure]),
            scripted(&[]),
        ]);
        assert_eq!(ticks(&mut seq, 4), vec![Running, Running, Running, Failure]);
    }

    #[test]
    fn empty_sequence_succeeds() {
        let mut seq: Sequence<()> = Sequence::new(Vec::new());
        assert!(seq.is_empty());
        assert_eq!(seq.run(&mut (), ()), Success);
    }

    // ── Selection ───────────────────────────────────────────────

    #[test]
    fn selection_succeeds_at_first_success() {
        let mut sel = Selection::new(vec![
            scripted(&[Running, Failure]),
            scripted(&[Failure]),
            scripted(&[Running, Failure]),
            scripted(&[Success]),
            scripted(&[]),
        ]);
        assert_eq!(ticks(&mut sel, 3), vec![Running, Running, Success]);
    }

    #[test]
    fn selection_fails_after_every_child() {
        let mut sel = Selection::new(vec![
            scripted(&[Running, Failure]),
            scripted(&[Failure]),
            scripted(&[Running, Failure]),
            scripted(&[Failure]),
            scripted(&[Failure]),
            scripted(&[Running, Failure]),
        ]);
        assert_eq!(ticks(&mut sel, 4), vec![Running, Running, Running, Failure]);
    }

    #[test]
    fn empty_selection_fails() {
        let mut sel: Selection<()> = Selection::new(Vec::new());
        assert_eq!(sel.len(), 0);
        assert_eq!(sel.run(&mut (), ()), Failure);
    }

    // ── Reset ───────────────────────────────────────────────────

    #[test]
    fn reset_rewinds_to_first_child() {
        let mut seq = Sequence::new(vec![
            scripted(&[Success, Success]),
            scripted(&[Running, Success]),
        ]);
        assert_eq!(seq.run(&mut (), ()), Running);
        seq.reset();
        // First child ticks again, then the second resumes its script.
        assert_eq!(ticks(&mut seq, 1), vec![Success]);
    }

    #[test]
    fn agent_is_passed_to_every_child() {
        let mut seq = Sequence::new(vec![
            action(|seen: &mut Vec<u32>, id: u32| {
                seen.push(id);
                Success
            })
            .boxed(),
            action(|seen: &mut Vec<u32>, id: u32| {
                seen.push(id * 10);
                Success
            })
            .boxed(),
        ]);
        let mut seen = Vec::new();
        assert_eq!(seq.run(&mut seen, 4), Success);
        assert_eq!(seen, vec![4, 40]);
    }
}
