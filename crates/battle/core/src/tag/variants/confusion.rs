use crate::action::{BattleAction, CommonAnim, TagMessage};
use crate::combat::confusion_damage;
use crate::tag::context::TagContext;
use crate::tag::{BattleTag, LapseCategory};

pub(crate) fn on_add(ctx: &mut TagContext<'_>) {
    ctx.animate(ctx.side(), CommonAnim::Confusion);
    ctx.notify(TagMessage::BecameConfused);
}

pub(crate) fn on_overlap(ctx: &mut TagContext<'_>) {
    ctx.notify(TagMessage::AlreadyConfused);
}

pub(crate) fn on_remove(ctx: &mut TagContext<'_>) {
    ctx.notify(TagMessage::SnappedOutOfConfusion);
}

/// Counts down, then flips a coin: heads means the holder hits itself
/// instead of moving.
///
/// A custom trigger neither counts down nor rolls.
pub(crate) fn lapse(
    tag: &mut BattleTag,
    ctx: &mut TagContext<'_>,
    trigger: LapseCategory,
) -> bool {
    if trigger == LapseCategory::Custom {
        return true;
    }

    let active = tag.count_down();
    if !active {
        return false;
    }

    let side = ctx.side();
    ctx.notify(TagMessage::IsConfused);
    ctx.animate(side, CommonAnim::Confusion);

    if ctx.rolls().coin_flip() {
        let config = ctx.config();
        let roll = ctx
            .rolls()
            .range(config.damage_roll_min, config.damage_roll_max);
        let holder = *ctx.holder();
        let amount = confusion_damage(
            holder.level,
            holder.attack,
            holder.defense,
            config.confusion_hit_power,
            roll,
        );
        tracing::trace!(?side, roll, amount, "confusion self-hit");

        ctx.notify(TagMessage::HurtItselfInConfusion);
        ctx.push(BattleAction::Damage {
            target: side,
            amount,
        });
        ctx.cancel_move();
    }

    true
}
