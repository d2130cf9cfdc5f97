//! Combatant construction errors.

use crate::config::BattleConfig;

/// Stats rejected when a [`Combatant`](super::Combatant) is built.
///
/// Tag formulas divide by defense and take fractions of max HP, so both must
/// be positive before a combatant can hold tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatsError {
    #[error(
        "level {level} outside {min}..={max}",
        min = BattleConfig::MIN_LEVEL,
        max = BattleConfig::MAX_LEVEL
    )]
    LevelOutOfRange { level: u32 },

    #[error("max hp must be positive")]
    ZeroMaxHp,

    #[error("defense must be positive")]
    ZeroDefense,
}
