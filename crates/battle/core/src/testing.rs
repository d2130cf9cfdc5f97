//! Shared fixtures for unit tests.

use crate::action::{ActionQueue, BattleAction};
use crate::config::BattleConfig;
use crate::env::{FixedRng, RollSource};
use crate::state::{HolderStats, Side};
use crate::tag::TagContext;

/// Level 50, 80 max HP, 100 attack, 100 defense.
pub(crate) fn holder(side: Side) -> HolderStats {
    HolderStats {
        side,
        level: 50,
        max_hp: 80,
        attack: 100,
        defense: 100,
    }
}

/// Owns what a [`TagContext`] borrows so tests can inspect it afterwards.
pub(crate) struct Harness {
    pub(crate) queue: ActionQueue,
    pub(crate) config: BattleConfig,
    rng: FixedRng,
}

impl Harness {
    pub(crate) fn new(rng_value: u32) -> Self {
        Self {
            queue: ActionQueue::new(),
            config: BattleConfig::default(),
            rng: FixedRng(rng_value),
        }
    }

    pub(crate) fn ctx(&mut self, holder: HolderStats) -> TagContext<'_> {
        let rolls = RollSource::new(&self.rng, 0, 0, holder.side);
        TagContext::new(holder, rolls, &mut self.queue, &self.config)
    }

    /// Drains the queue in run order.
    pub(crate) fn take_actions(&mut self) -> Vec<BattleAction> {
        core::mem::take(&mut self.queue).into_iter().collect()
    }
}
