//! Tags that take away the holder's move.

use crate::action::{BattleAction, TagMessage};
use crate::tag::BattleTag;
use crate::tag::context::TagContext;

pub(crate) fn recharging_on_add(ctx: &mut TagContext<'_>) {
    let target = ctx.side();
    ctx.push(BattleAction::QueueEmptyMove { target });
}

/// Cancels the move once, then expires.
pub(crate) fn recharging_lapse(tag: &mut BattleTag, ctx: &mut TagContext<'_>) -> bool {
    let active = tag.count_down();
    ctx.cancel_move();
    ctx.notify(TagMessage::MustRecharge);
    active
}

pub(crate) fn flinched_lapse(tag: &mut BattleTag, ctx: &mut TagContext<'_>) -> bool {
    let active = tag.count_down();
    ctx.cancel_move();
    ctx.notify(TagMessage::Flinched);
    active
}
