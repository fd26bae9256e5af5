//! The [`DeltaClock`] sparse priority queue.
//!
//! Moments live in a slab (`Vec` plus free list) and link to each other
//! by slot index, forming a singly linked chain ordered by due-time. A
//! side index maps every scheduled key to the slot of its moment, so
//! removal never walks the chain.

use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;
use tracing::trace;

/// One link in the chain: every key due at the same tick.
#[derive(Clone, Debug)]
struct Moment<K> {
    /// Ticks after the previous moment (after "now" for the head).
    delay: u64,
    /// Slot of the next later moment.
    next: Option<usize>,
    /// Keys due at this moment.
    keys: IndexSet<K>,
}

/// A delta clock over schedulable keys.
///
/// Each key has at most one outstanding due-time. Keys due at the same
/// tick come back together from a single [`advance`](DeltaClock::advance)
/// call. The order of keys *within* one batch is unspecified: it is
/// deterministic for a given sequence of calls, but callers must not
/// treat it as a tie-break rule.
///
/// Delays count [`advance`](DeltaClock::advance) calls: a key scheduled
/// with delay `d >= 1` is returned by the `d`-th following advance. A
/// delay of `0` means "as soon as possible", i.e. the next advance, the
/// same as a delay of `1`.
///
/// # Examples
///
/// ```
/// use delve_clock::DeltaClock;
///
/// let mut clock = DeltaClock::new();
/// clock.schedule("slow", 3);
/// clock.schedule("fast", 1);
/// assert_eq!(clock.advance(), vec!["fast"]);
/// assert!(clock.advance().is_empty());
/// assert_eq!(clock.advance(), vec!["slow"]);
/// ```
#[derive(Clone, Debug)]
pub struct DeltaClock<K> {
    /// Slab of moments (live and released).
    moments: Vec<Moment<K>>,
    /// Released slots available for reuse.
    free: Vec<usize>,
    /// Earliest pending moment.
    head: Option<usize>,
    /// Scheduled key → slot of the moment holding it.
    index: IndexMap<K, usize>,
}

impl<K: Hash + Eq + Clone> DeltaClock<K> {
    /// Create an empty clock.
    pub fn new() -> Self {
        Self {
            moments: Vec::new(),
            free: Vec::new(),
            head: None,
            index: IndexMap::new(),
        }
    }

    /// Schedule `key` to come due after `delay` advances.
    ///
    /// Any existing entry for `key` is removed first, so re-scheduling
    /// replaces rather than duplicates.
    pub fn schedule(&mut self, key: K, delay: u64) {
        self.unschedule(&key);

        // Walk the chain, consuming relative delays, until the target
        // lands at or before the next moment.
        let mut remaining = delay;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let d = self.moments[slot].delay;
            if remaining <= d {
                break;
            }
            remaining -= d;
            prev = Some(slot);
            cursor = self.moments[slot].next;
        }

        let slot = match cursor {
            Some(slot) if self.moments[slot].delay == remaining => slot,
            _ => {
                let slot = self.alloc(remaining, cursor);
                match prev {
                    None => self.head = Some(slot),
                    Some(p) => self.moments[p].next = Some(slot),
                }
                // The following moment is now relative to the new one.
                if let Some(next) = cursor {
                    self.moments[next].delay -= remaining;
                }
                slot
            }
        };

        self.moments[slot].keys.insert(key.clone());
        self.index.insert(key, slot);
    }

    /// Remove `key` from the clock.
    ///
    /// Returns whether it was scheduled. The (possibly now empty) moment
    /// stays in the chain and is discarded when time reaches it.
    pub fn unschedule(&mut self, key: &K) -> bool {
        match self.index.swap_remove(key) {
            Some(slot) => {
                self.moments[slot].keys.swap_remove(key);
                true
            }
            None => false,
        }
    }

    /// Advance time by one tick and return every key now due.
    ///
    /// Returned keys are no longer scheduled. The result is empty when
    /// nothing came due.
    pub fn advance(&mut self) -> Vec<K> {
        let mut due = Vec::new();
        // One tick of elapsed time, carried across moments with a zero
        // relative delay.
        let mut budget = 1u64;
        while let Some(slot) = self.head {
            let moment = &mut self.moments[slot];
            if moment.delay > budget {
                moment.delay -= budget;
                break;
            }
            budget -= moment.delay;
            self.head = moment.next;
            for key in moment.keys.drain(..) {
                self.index.swap_remove(&key);
                due.push(key);
            }
            self.release(slot);
        }
        trace!(
            due = due.len(),
            pending = self.index.len(),
            "clock advanced"
        );
        due
    }

    /// Whether `key` is currently scheduled.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Advances remaining until `key` comes due, if scheduled.
    ///
    /// Walks the chain up to the key's moment: O(m).
    pub fn delay_of(&self, key: &K) -> Option<u64> {
        let target = *self.index.get(key)?;
        let mut total = 0;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            total += self.moments[slot].delay;
            if slot == target {
                return Some(total.max(1));
            }
            cursor = self.moments[slot].next;
        }
        None
    }

    /// Number of scheduled keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no key is scheduled.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of moments in the chain, including emptied ones not yet
    /// reached.
    pub fn moment_count(&self) -> usize {
        self.moments.len() - self.free.len()
    }

    /// Unschedule everything.
    pub fn clear(&mut self) {
        self.moments.clear();
        self.free.clear();
        self.head = None;
        self.index.clear();
    }

    /// Take a slot for a new moment, reusing a released one if possible.
    fn alloc(&mut self, delay: u64, next: Option<usize>) -> usize {
        let moment = Moment {
            delay,
            next,
            keys: IndexSet::new(),
        };
        match self.free.pop() {
            Some(slot) => {
                self.moments[slot] = moment;
                slot
            }
            None => {
                self.moments.push(moment);
                self.moments.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) {
        let moment = &mut self.moments[slot];
        moment.next = None;
        moment.keys.clear();
        self.free.push(slot);
    }
}

impl<K: Hash + Eq + Clone> Default for DeltaClock<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set<'a>(keys: Vec<&'a str>) -> HashSet<&'a str> {
        keys.into_iter().collect()
    }

    // ── Ordering ────────────────────────────────────────────────

    #[test]
    fn ties_come_back_together() {
        let mut c = DeltaClock::new();
        c.schedule("a", 2);
        c.schedule("b", 2);
        c.schedule("c", 5);

        assert!(c.advance().is_empty());
        assert_eq!(set(c.advance()), set(vec!["a", "b"]));
        assert!(c.advance().is_empty());
        assert!(c.advance().is_empty());
        assert_eq!(c.advance(), vec!["c"]);
        assert!(c.is_empty());
    }

    #[test]
    fn insert_between_moments_rebases_successor() {
        let mut c = DeltaClock::new();
        c.schedule("late", 6);
        c.schedule("early", 2);
        c.schedule("mid", 4);
        assert_eq!(c.moment_count(), 3);
        assert_eq!(c.delay_of(&"early"), Some(2));
        assert_eq!(c.delay_of(&"mid"), Some(4));
        assert_eq!(c.delay_of(&"late"), Some(6));

        let fired: Vec<Vec<&str>> = (0..6).map(|_| c.advance()).collect();
        assert_eq!(
            fired,
            vec![
                vec![],
                vec!["early"],
                vec![],
                vec!["mid"],
                vec![],
                vec!["late"]
            ]
        );
    }

    #[test]
    fn zero_delay_is_next_tick() {
        let mut c = DeltaClock::new();
        c.schedule("now", 0);
        c.schedule("one", 1);
        c.schedule("two", 2);
        assert_eq!(set(c.advance()), set(vec!["now", "one"]));
        assert_eq!(c.advance(), vec!["two"]);
    }

    #[test]
    fn zero_delay_ahead_of_later_moment() {
        let mut c = DeltaClock::new();
        c.schedule("later", 3);
        c.schedule("now", 0);
        assert_eq!(c.advance(), vec!["now"]);
        assert!(c.advance().is_empty());
        assert_eq!(c.advance(), vec!["later"]);
    }

    // ── Rescheduling ────────────────────────────────────────────

    #[test]
    fn reschedule_replaces_entry() {
        let mut c = DeltaClock::new();
        c.schedule("x", 3);
        c.schedule("x", 1);
        assert_eq!(c.len(), 1);
        assert_eq!(c.advance(), vec!["x"]);
        assert!(c.advance().is_empty());
        assert!(c.advance().is_empty());
    }

    #[test]
    fn unschedule_is_idempotent() {
        let mut c = DeltaClock::new();
        c.schedule(7u32, 2);
        assert!(c.contains(&7));
        assert!(c.unschedule(&7));
        assert!(!c.unschedule(&7));
        assert!(!c.contains(&7));
        assert!(c.advance().is_empty());
        assert!(c.advance().is_empty());
    }

    #[test]
    fn emptied_moment_keeps_later_timing() {
        let mut c = DeltaClock::new();
        c.schedule("gone", 2);
        c.schedule("kept", 5);
        c.unschedule(&"gone");
        let fired: Vec<usize> = (0..5).map(|_| c.advance().len()).collect();
        assert_eq!(fired, vec![0, 0, 0, 0, 1]);
    }

    // ── Bookkeeping ─────────────────────────────────────────────

    #[test]
    fn advance_on_empty_clock() {
        let mut c: DeltaClock<u8> = DeltaClock::default();
        assert!(c.advance().is_empty());
        assert_eq!(c.moment_count(), 0);
    }

    #[test]
    fn released_slots_are_reused() {
        let mut c = DeltaClock::new();
        for round in 0..10u32 {
            c.schedule(round, 1);
            assert_eq!(c.advance(), vec![round]);
        }
        assert_eq!(c.moments.len(), 1);
        assert_eq!(c.moment_count(), 0);
    }

    #[test]
    fn clear_drops_everything() {
        let mut c = DeltaClock::new();
        c.schedule('a', 1);
        c.schedule('b', 9);
        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.delay_of(&'b'), None);
        assert!(c.advance().is_empty());
    }

    #[test]
    fn delay_of_tracks_advances() {
        let mut c = DeltaClock::new();
        c.schedule("k", 4);
        c.advance();
        assert_eq!(c.delay_of(&"k"), Some(3));
        c.schedule("j", 0);
        assert_eq!(c.delay_of(&"j"), Some(1));
        assert_eq!(c.delay_of(&"k"), Some(3));
    }
}
