use crate::combat::{apply_damage, apply_heal};
use crate::config::BattleConfig;
use crate::registry::BattleTags;

use super::{HolderStats, NonVolatileStatus, Side, StatsError};

/// Battle stats after stage modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleStats {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl BattleStats {
    pub const fn new(max_hp: u32, attack: u32, defense: u32) -> Self {
        Self {
            max_hp,
            attack,
            defense,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingVisibility {
    visible: bool,
    frames_left: u32,
}

/// A combatant on the field together with its tag registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    side: Side,
    level: u32,
    stats: BattleStats,
    hp: u32,
    status: Option<NonVolatileStatus>,
    visible: bool,
    pending_visibility: Option<PendingVisibility>,
    /// Empty move slots forced onto the move queue (recharge turns).
    queued_empty_moves: u32,
    tags: BattleTags,
}

impl Combatant {
    /// Creates a combatant at full HP with no status and no tags.
    pub fn new(side: Side, level: u32, stats: BattleStats) -> Result<Self, StatsError> {
        if !(BattleConfig::MIN_LEVEL..=BattleConfig::MAX_LEVEL).contains(&level) {
            return Err(StatsError::LevelOutOfRange { level });
        }
        if stats.max_hp == 0 {
            return Err(StatsError::ZeroMaxHp);
        }
        if stats.defense == 0 {
            return Err(StatsError::ZeroDefense);
        }

        Ok(Self {
            side,
            level,
            stats,
            hp: stats.max_hp,
            status: None,
            visible: true,
            pending_visibility: None,
            queued_empty_moves: 0,
            tags: BattleTags::new(),
        })
    }

    /// Sets current HP, clamped to max HP.
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.stats.max_hp);
        self
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn stats(&self) -> BattleStats {
        self.stats
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn status(&self) -> Option<NonVolatileStatus> {
        self.status
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn tags(&self) -> &BattleTags {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut BattleTags {
        &mut self.tags
    }

    /// Snapshot handed to tag hooks.
    pub fn holder_stats(&self) -> HolderStats {
        HolderStats {
            side: self.side,
            level: self.level,
            max_hp: self.stats.max_hp,
            attack: self.stats.attack,
            defense: self.stats.defense,
        }
    }

    /// Applies damage and returns the new HP (never below zero).
    pub fn damage(&mut self, amount: u32) -> u32 {
        self.hp = apply_damage(self.hp, amount);
        self.hp
    }

    /// Restores HP and returns the new value (never above max HP).
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp = apply_heal(self.hp, amount, self.stats.max_hp);
        self.hp
    }

    /// Inflicts a major status. Fails if one is already present.
    pub fn try_set_status(&mut self, status: NonVolatileStatus) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status = Some(status);
        true
    }

    pub fn cure_status(&mut self) -> Option<NonVolatileStatus> {
        self.status.take()
    }

    /// Changes visibility now, or after `delay_frames` calls to
    /// [`advance_frame`](Self::advance_frame).
    pub fn set_visible(&mut self, visible: bool, delay_frames: u32) {
        if delay_frames == 0 {
            self.visible = visible;
            self.pending_visibility = None;
        } else {
            self.pending_visibility = Some(PendingVisibility {
                visible,
                frames_left: delay_frames,
            });
        }
    }

    pub fn advance_frame(&mut self) {
        if let Some(pending) = self.pending_visibility.as_mut() {
            pending.frames_left -= 1;
            if pending.frames_left == 0 {
                self.visible = pending.visible;
                self.pending_visibility = None;
            }
        }
    }

    pub fn queue_empty_move(&mut self) {
        self.queued_empty_moves += 1;
    }

    /// Consumes one forced empty move, if any.
    pub fn take_empty_move(&mut self) -> bool {
        if self.queued_empty_moves == 0 {
            return false;
        }
        self.queued_empty_moves -= 1;
        true
    }
}
