//! Delta-clock scheduling for delve simulations.
//!
//! A [`DeltaClock`] answers one question per tick: which keys are due
//! now? It stores pending due-times as a chain of *relative* offsets,
//! so advancing time touches only the head of the chain.
//!
//! ```text
//! now ──3──▶ {a, b} ──2──▶ {c} ──4──▶ {d}
//!            due @3        due @5      due @9
//! ```
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `schedule` | O(m), m = distinct pending moments |
//! | `unschedule` | O(1) |
//! | `advance` | O(p) for p keys coming due, O(1) otherwise |
//!
//! # Zero delays
//!
//! A delay of 0 means "on the next advance", exactly like a delay of 1:
//! keys scheduled at 0 and at 1 come back from the same `advance` call.
//! Each advance spends one tick of budget across the head of the chain,
//! so a zero-delay moment never pushes later moments back by a tick.
//!
//! ```
//! use delve_clock::DeltaClock;
//!
//! let mut clock = DeltaClock::new();
//! clock.schedule("now", 0);
//! clock.schedule("one", 1);
//! clock.schedule("three", 3);
//! assert_eq!(clock.advance().len(), 2);
//! assert!(clock.advance().is_empty());
//! assert_eq!(clock.advance(), vec!["three"]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;

pub use clock::DeltaClock;
