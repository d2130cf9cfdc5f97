//! HP formulas used by tags.
//!
//! All arithmetic is integer. Fractional intermediate values of the
//! self-hit formula are kept as an exact ratio and rounded once at the end.

/// Damage a confused combatant deals itself.
///
/// # Formula
///
/// ```text
/// base   = ((2 * level / 5 + 2) * power * attack / defense) / 50 + 2
/// damage = ceil(base * roll / 100)
/// ```
///
/// Expanded over the common denominator `25000 * defense`:
///
/// ```text
/// damage = ceil(((2 * level + 10) * power * attack + 500 * defense) * roll
///               / (25000 * defense))
/// ```
///
/// A zero `defense` is treated as 1. Products saturate, so oversized stats
/// clamp the result to `u32::MAX`.
pub fn confusion_damage(level: u32, attack: u32, defense: u32, power: u32, roll: u32) -> u32 {
    let level = u128::from(level);
    let defense = u128::from(defense.max(1));
    let numerator = ((2 * level + 10)
        .saturating_mul(u128::from(power))
        .saturating_mul(u128::from(attack))
        .saturating_add(500 * defense))
    .saturating_mul(u128::from(roll));
    let denominator = 25_000 * defense;

    u32::try_from(numerator.div_ceil(denominator)).unwrap_or(u32::MAX)
}

/// Leech seed drain: an eighth of max HP, at least 1.
pub fn seed_drain(max_hp: u32) -> u32 {
    (max_hp / 8).max(1)
}

/// Nightmare damage: a quarter of max HP, rounded up.
pub fn nightmare_damage(max_hp: u32) -> u32 {
    max_hp.div_ceil(4)
}

/// Ingrain / aqua ring recovery: a sixteenth of max HP, rounded down.
pub fn residual_heal(max_hp: u32) -> u32 {
    max_hp / 16
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Apply healing to current HP.
///
/// # Returns
///
/// New HP value (clamped to `max_hp`)
pub fn apply_heal(current_hp: u32, amount: u32, max_hp: u32) -> u32 {
    current_hp.saturating_add(amount).min(max_hp)
}
