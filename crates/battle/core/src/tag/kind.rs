/// Every status a tag can represent.
///
/// The enumeration is closed and scoped to battle tags; major statuses live
/// in [`NonVolatileStatus`](crate::state::NonVolatileStatus).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TagKind {
    // ========================================================================
    // Move interruption
    // ========================================================================
    /// Must skip a turn after a recharge move.
    Recharging,
    /// Loses the move this turn.
    Flinched,

    // ========================================================================
    // Pseudo-statuses
    // ========================================================================
    Confused,
    /// Drained every turn to heal the opponent.
    Seeded,
    Nightmare,
    /// Locked into a rampage. No behaviour of its own yet.
    Frenzy,
    Ingrain,
    AquaRing,
    /// Falls asleep at the end of the next turn.
    Drowsy,
    Protected,

    // ========================================================================
    // Semi-invulnerable forms
    // ========================================================================
    Flying,
    Underground,

    // ========================================================================
    // Counted modifiers
    // ========================================================================
    NoCrit,
    BypassSleep,
    IgnoreFlying,
}

/// Timing point at which a tag is evaluated.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LapseCategory {
    /// The holder fainted.
    Faint,
    /// The holder is about to use a move.
    MoveAttempt,
    /// The holder's move has resolved.
    AfterMove,
    /// A move's effects are being applied.
    MoveEffect,
    TurnEnd,
    /// Ad-hoc evaluation outside the turn structure (e.g. a protection check).
    Custom,
}
