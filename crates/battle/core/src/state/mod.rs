//! Combatant state consumed by the tag engine.
//!
//! The engine only reads a [`HolderStats`] snapshot while hooks run; the
//! [`Combatant`] type is the reference holder that owns a tag registry and
//! absorbs the actions tags produce.
mod combatant;
mod error;
mod status;

pub use combatant::{BattleStats, Combatant};
pub use error::StatsError;
pub use status::NonVolatileStatus;

/// Which half of a singles battle a combatant stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Player => 0,
            Self::Enemy => 1,
        }
    }
}

/// Read-only view of the combatant a hook is running for.
///
/// `attack` and `defense` are battle stats, i.e. after stage modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HolderStats {
    pub side: Side,
    pub level: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
}
