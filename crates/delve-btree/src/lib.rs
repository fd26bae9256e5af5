//! Behaviour trees for delve actors.
//!
//! A tree is built from [`Behaviour`] nodes that are ticked with
//! [`Behaviour::run`] and report a [`Status`]. Nodes are generic over a
//! context `C` handed to every leaf by `&mut` and an agent handle `A`
//! passed by value, so a tree can drive a `World` for one actor without
//! holding a borrow between ticks.
//!
//! | Kind | Nodes |
//! |------|-------|
//! | Leaves | [`Action`], [`Func`], [`Conditional`] |
//! | Composites | [`Sequence`] (all must succeed), [`Selection`] (first success wins) |
//! | Decorators | [`Decorator`] with [`invert`], [`repeat`], [`force_success`], [`force_failure`], [`until`], [`while_`] |
//!
//! Composites remember which child is running, so a `Running` child is
//! resumed on the next tick rather than restarted. [`Behaviour::reset`]
//! rewinds a subtree.
//!
//! ```
//! use delve_btree::{condition, func, Behaviour, BehaviourExt, Sequence, Status};
//!
//! let mut tree = Sequence::new(vec![
//!     condition(|hp: &mut i32, ()| *hp < 5).boxed(),
//!     func(|hp: &mut i32, ()| *hp += 3).boxed(),
//! ]);
//! let mut hp = 2;
//! assert_eq!(tree.run(&mut hp, ()), Status::Success);
//! assert_eq!(hp, 5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod composite;
pub mod decorator;
pub mod node;

pub use composite::{Selection, Sequence};
pub use decorator::{
    force_failure, force_success, invert, repeat, until, while_, Decorator, DecoratorKind,
};
pub use node::{
    action, condition, func, Action, Behaviour, BehaviourExt, BoxedBehaviour, Conditional, Func,
    Status,
};
