//! Per-turn HP loss: leech seed and nightmare.

use crate::action::{BattleAction, CommonAnim, TagMessage, TagNotice};
use crate::combat::{nightmare_damage, seed_drain};
use crate::tag::context::TagContext;
use crate::tag::{BattleTag, LapseCategory};

use super::fires_until_cured;

pub(crate) fn seeded_on_add(ctx: &mut TagContext<'_>) {
    ctx.notify(TagMessage::WasSeeded);
}

/// Drains the holder and heals the opponent by the same amount.
pub(crate) fn seeded_lapse(
    tag: &mut BattleTag,
    ctx: &mut TagContext<'_>,
    trigger: LapseCategory,
) -> bool {
    let fired = fires_until_cured(tag, trigger);
    if fired {
        let side = ctx.side();
        let opponent = ctx.opponent();
        let amount = seed_drain(ctx.holder().max_hp);

        ctx.animate(opponent, CommonAnim::LeechSeed);
        ctx.push(BattleAction::Damage {
            target: side,
            amount,
        });
        ctx.push(BattleAction::Heal {
            target: opponent,
            amount,
            notice: Some(TagNotice::new(side, TagMessage::HealthSapped)),
            announce_full_hp: false,
            skip_anim: true,
        });
    }
    fired
}

pub(crate) fn nightmare_on_add(ctx: &mut TagContext<'_>) {
    ctx.notify(TagMessage::BeganNightmare);
}

pub(crate) fn nightmare_on_overlap(ctx: &mut TagContext<'_>) {
    ctx.notify(TagMessage::AlreadyInNightmare);
}

pub(crate) fn nightmare_lapse(
    tag: &mut BattleTag,
    ctx: &mut TagContext<'_>,
    trigger: LapseCategory,
) -> bool {
    let fired = fires_until_cured(tag, trigger);
    if fired {
        let side = ctx.side();
        ctx.notify(TagMessage::LockedInNightmare);
        ctx.animate(side, CommonAnim::Curse);
        ctx.push(BattleAction::Damage {
            target: side,
            amount: nightmare_damage(ctx.holder().max_hp),
        });
    }
    fired
}
