//! End-of-turn recovery: ingrain and aqua ring. Both may be active at once.

use crate::action::{BattleAction, TagMessage, TagNotice};
use crate::combat::residual_heal;
use crate::tag::context::TagContext;
use crate::tag::{BattleTag, LapseCategory};

use super::fires_until_cured;

pub(crate) fn ingrain_on_add(ctx: &mut TagContext<'_>) {
    ctx.notify(TagMessage::PlantedRoots);
}

pub(crate) fn ingrain_lapse(
    tag: &mut BattleTag,
    ctx: &mut TagContext<'_>,
    trigger: LapseCategory,
) -> bool {
    let fired = fires_until_cured(tag, trigger);
    if fired {
        heal_holder(ctx, TagMessage::AbsorbedNutrients);
    }
    fired
}

pub(crate) fn aqua_ring_on_add(ctx: &mut TagContext<'_>) {
    ctx.notify(TagMessage::SurroundedByWaterVeil);
}

pub(crate) fn aqua_ring_lapse(
    tag: &mut BattleTag,
    ctx: &mut TagContext<'_>,
    trigger: LapseCategory,
) -> bool {
    let fired = fires_until_cured(tag, trigger);
    if fired {
        heal_holder(ctx, TagMessage::AquaRingRestored);
    }
    fired
}

fn heal_holder(ctx: &mut TagContext<'_>, message: TagMessage) {
    let side = ctx.side();
    ctx.push(BattleAction::Heal {
        target: side,
        amount: residual_heal(ctx.holder().max_hp),
        notice: Some(TagNotice::new(side, message)),
        announce_full_hp: true,
        skip_anim: false,
    });
}
