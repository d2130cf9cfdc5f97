use crate::action::BattleAction;
use crate::tag::context::TagContext;

pub(crate) fn on_add(ctx: &mut TagContext<'_>) {
    let target = ctx.side();
    ctx.push(BattleAction::SetVisible {
        target,
        visible: false,
        delay_frames: 0,
    });
}

/// Shows the holder again after a short delay so an effect animation that
/// is still playing does not reveal it early.
pub(crate) fn on_remove(ctx: &mut TagContext<'_>) {
    let target = ctx.side();
    let delay_frames = ctx.config().reveal_delay_frames;
    ctx.push(BattleAction::SetVisible {
        target,
        visible: true,
        delay_frames,
    });
}
