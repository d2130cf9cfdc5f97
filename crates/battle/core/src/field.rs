//! Reference host for the tag engine.
//!
//! [`BattleField`] holds one combatant per side, the RNG oracle and the
//! config. For every inbound call it builds a [`TagContext`] for the holder,
//! runs the registry operation and then interprets the queued actions in run
//! order against the combatants. Interpreted actions are appended to a
//! journal the presentation layer can replay.

use tracing::trace;

use crate::action::{ActionQueue, BattleAction};
use crate::config::BattleConfig;
use crate::env::{PcgRng, RngOracle, RollSource};
use crate::registry::{BattleTags, LapseOutcome};
use crate::state::{Combatant, Side};
use crate::tag::{LapseCategory, TagContext, TagKind};

/// Two combatants and everything needed to run their tags.
pub struct BattleField<R: RngOracle = PcgRng> {
    player: Combatant,
    enemy: Combatant,
    config: BattleConfig,
    rng: R,
    seed: u64,
    turn: u64,
    /// Rolls each side has drawn this turn, indexed by [`Side::index`].
    rolls_drawn: [u32; 2],
    journal: Vec<BattleAction>,
}

impl<R: RngOracle> BattleField<R> {
    pub fn new(player: Combatant, enemy: Combatant, rng: R, seed: u64) -> Self {
        Self {
            player,
            enemy,
            config: BattleConfig::default(),
            rng,
            seed,
            turn: 0,
            rolls_drawn: [0; 2],
            journal: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn advance_turn(&mut self) {
        self.turn += 1;
        self.rolls_drawn = [0; 2];
    }

    /// Rolls `side`'s tags have drawn since the turn started.
    pub fn rolls_drawn(&self, side: Side) -> u32 {
        self.rolls_drawn[side.index()]
    }

    /// Every action interpreted so far, in run order.
    pub fn journal(&self) -> &[BattleAction] {
        &self.journal
    }

    pub fn take_journal(&mut self) -> Vec<BattleAction> {
        core::mem::take(&mut self.journal)
    }

    /// Applies a tag to `side`. Returns `false` on overlap.
    pub fn apply_tag(
        &mut self,
        side: Side,
        kind: TagKind,
        turns: i32,
        source: Option<Side>,
    ) -> bool {
        self.run(side, |tags, ctx| tags.add(kind, turns, source, ctx))
    }

    /// Cures a tag on `side`. Returns whether it was present.
    pub fn remove_tag(&mut self, side: Side, kind: TagKind) -> bool {
        self.run(side, |tags, ctx| tags.remove(kind, ctx))
    }

    /// Runs one timing point for `side`.
    pub fn dispatch_lapse(&mut self, side: Side, category: LapseCategory) -> LapseOutcome {
        self.run(side, |tags, ctx| tags.lapse(category, ctx))
    }

    /// Custom-trigger evaluation of a single tag on `side`.
    pub fn lapse_tag(&mut self, side: Side, kind: TagKind) -> bool {
        self.run(side, |tags, ctx| tags.lapse_tag(kind, ctx))
    }

    /// Drops every tag on `side` (faint, switch-out).
    pub fn clear_tags(&mut self, side: Side) {
        self.run(side, |tags, ctx| tags.clear(ctx));
    }

    /// Advances delayed visibility changes on both sides by one frame.
    pub fn advance_frame(&mut self) {
        self.player.advance_frame();
        self.enemy.advance_frame();
    }

    fn run<T>(
        &mut self,
        side: Side,
        operation: impl FnOnce(&mut BattleTags, &mut TagContext<'_>) -> T,
    ) -> T {
        let mut queue = ActionQueue::new();
        let result = {
            let holder = match side {
                Side::Player => &mut self.player,
                Side::Enemy => &mut self.enemy,
            };
            let rolls = RollSource::new(&self.rng, self.seed, self.turn, side)
                .with_offset(self.rolls_drawn[side.index()]);
            let mut ctx = TagContext::new(holder.holder_stats(), rolls, &mut queue, &self.config);
            let result = operation(holder.tags_mut(), &mut ctx);
            self.rolls_drawn[side.index()] = ctx.rolls().rolls_drawn();
            result
        };
        self.resolve(queue);
        result
    }

    fn resolve(&mut self, queue: ActionQueue) {
        for action in queue {
            match &action {
                BattleAction::Damage { target, amount } => {
                    let hp = self.combatant_mut(*target).damage(*amount);
                    trace!(?target, amount, hp, "damage");
                }
                BattleAction::Heal { target, amount, .. } => {
                    let hp = self.combatant_mut(*target).heal(*amount);
                    trace!(?target, amount, hp, "heal");
                }
                BattleAction::ObtainStatus { target, status } => {
                    let applied = self.combatant_mut(*target).try_set_status(*status);
                    trace!(?target, %status, applied, "obtain status");
                }
                BattleAction::SetVisible {
                    target,
                    visible,
                    delay_frames,
                } => {
                    self.combatant_mut(*target)
                        .set_visible(*visible, *delay_frames);
                }
                BattleAction::QueueEmptyMove { target } => {
                    self.combatant_mut(*target).queue_empty_move();
                }
                BattleAction::Message(_) | BattleAction::Animation { .. } => {}
            }
            self.journal.push(action);
        }
    }
}
