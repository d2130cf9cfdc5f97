use crate::action::{BattleAction, TagMessage};
use crate::state::NonVolatileStatus;
use crate::tag::BattleTag;
use crate::tag::context::TagContext;

pub(crate) fn on_add(ctx: &mut TagContext<'_>) {
    ctx.notify(TagMessage::GrewDrowsy);
}

/// Puts the holder to sleep when the countdown runs out.
pub(crate) fn lapse(tag: &mut BattleTag, ctx: &mut TagContext<'_>) -> bool {
    if tag.count_down() {
        return true;
    }

    let target = ctx.side();
    ctx.push(BattleAction::ObtainStatus {
        target,
        status: NonVolatileStatus::Sleep,
    });
    false
}
