//! Status-tag engine for turn-based creature battles.
//!
//! `battle-core` models the temporary conditions a combatant can carry
//! (confusion, leech seed, recharge, flinch, protection, drowsiness, hidden
//! forms and plain counted tags) and the lapse protocol that decides when
//! each of them fires, what it does and when it expires.
//!
//! Tags never touch the battle directly. Every hook pushes declarative
//! [`BattleAction`]s onto an [`ActionQueue`] and may raise the move-cancel
//! flag on its [`TagContext`]; [`BattleField`] is a reference interpreter for
//! those actions.
pub mod action;
pub mod combat;
pub mod config;
pub mod env;
pub mod field;
pub mod registry;
pub mod state;
pub mod tag;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{ActionQueue, BattleAction, CommonAnim, TagMessage, TagNotice};
pub use config::BattleConfig;
pub use env::{FixedRng, PcgRng, RngOracle, RollSource, compute_seed};
pub use field::BattleField;
pub use registry::{BattleTags, LapseOutcome};
pub use state::{BattleStats, Combatant, HolderStats, NonVolatileStatus, Side, StatsError};
pub use tag::{BattleTag, LapseCategory, TagContext, TagKind, TagVariant, create_tag};
