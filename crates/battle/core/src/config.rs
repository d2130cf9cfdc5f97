use strum::EnumCount;

use crate::tag::TagKind;

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Power of the typeless physical hit a confused combatant deals itself.
    pub confusion_hit_power: u32,
    /// Lowest damage roll, in percent.
    pub damage_roll_min: u32,
    /// Highest damage roll, in percent.
    pub damage_roll_max: u32,
    /// Frames a hidden combatant waits before it is shown again, so effect
    /// animations already in flight do not clip it.
    pub reveal_delay_frames: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// One slot per tag kind; a combatant never holds two tags of one kind.
    pub const MAX_TAGS: usize = TagKind::COUNT;
    pub const MIN_LEVEL: u32 = 1;
    pub const MAX_LEVEL: u32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CONFUSION_HIT_POWER: u32 = 40;
    pub const DEFAULT_DAMAGE_ROLL_MIN: u32 = 85;
    pub const DEFAULT_DAMAGE_ROLL_MAX: u32 = 100;
    pub const DEFAULT_REVEAL_DELAY_FRAMES: u32 = 2;

    pub fn new() -> Self {
        Self {
            confusion_hit_power: Self::DEFAULT_CONFUSION_HIT_POWER,
            damage_roll_min: Self::DEFAULT_DAMAGE_ROLL_MIN,
            damage_roll_max: Self::DEFAULT_DAMAGE_ROLL_MAX,
            reveal_delay_frames: Self::DEFAULT_REVEAL_DELAY_FRAMES,
        }
    }

    /// Replaces the damage roll window. Bounds are swapped if given reversed.
    #[must_use]
    pub fn with_damage_roll(mut self, min: u32, max: u32) -> Self {
        self.damage_roll_min = min.min(max);
        self.damage_roll_max = min.max(max);
        self
    }

    #[must_use]
    pub fn with_confusion_hit_power(mut self, power: u32) -> Self {
        self.confusion_hit_power = power;
        self
    }

    #[must_use]
    pub fn with_reveal_delay_frames(mut self, frames: u32) -> Self {
        self.reveal_delay_frames = frames;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
