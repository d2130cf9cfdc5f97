//! Collaborators supplied by the host battle.
//!
//! The engine owns no randomness of its own. Hosts plug in an [`RngOracle`]
//! and tags draw from it through a [`RollSource`] scoped to one holder and
//! one turn.
mod rng;

pub use rng::{FixedRng, PcgRng, RngOracle, RollSource, compute_seed};
