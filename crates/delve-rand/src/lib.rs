//! Deterministic random source for delve simulations.
//!
//! Every consumer that needs randomness (grid generation, behaviours,
//! scheduling jitter, weighted content selection) takes an explicit
//! [`Random`] by `&mut` reference. There is no global generator: two
//! instances seeded with the same value and driven through the same
//! call sequence produce bit-identical output, which is what makes
//! test fixtures and replays reproducible.
//!
//! # Backends
//!
//! - [`SplitMix64`]: the default. 64 bits of state, one add and two
//!   multiply-xorshift rounds per output.
//! - [`ChaCha8Rng`](rand_chacha::ChaCha8Rng): available as
//!   [`ChaChaRandom`] when a stronger stream is wanted.
//!
//! Both implement [`rand::RngCore`], and so does [`Random`] itself, so
//! anything in the `rand` ecosystem can draw from the same stream.
//! Bounded integer and slice draws go through `rand`'s own uniform
//! samplers (`Rng::gen_range`, `SliceRandom::choose`).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod random;
pub mod splitmix;

pub use error::RandomError;
pub use random::{ChaChaRandom, Random, REJECTION_ATTEMPTS};
pub use splitmix::SplitMix64;
