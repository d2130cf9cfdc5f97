use crate::action::{CommonAnim, TagMessage};
use crate::tag::context::TagContext;

pub(crate) fn on_add(ctx: &mut TagContext<'_>) {
    ctx.notify(TagMessage::ProtectedItself);
}

/// A protection check always succeeds and keeps the tag; the host removes
/// it at the turn boundary.
pub(crate) fn lapse(ctx: &mut TagContext<'_>) -> bool {
    // The animation plays before the message.
    ctx.notify(TagMessage::ProtectedItself);
    ctx.animate(ctx.side(), CommonAnim::Protect);
    true
}
