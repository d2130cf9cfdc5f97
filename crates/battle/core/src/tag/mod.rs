//! Battle tags: temporary conditions with lifecycle hooks.
//!
//! # Lapse protocol
//!
//! A tag belongs to exactly one [`LapseCategory`]. The registry lapses it only
//! when the scheduler dispatches that category, or with
//! [`LapseCategory::Custom`] for an ad-hoc check. The base lapse counts the
//! remaining turns down and keeps the tag while the count stays positive.
//! Variants layer their effects on top; see [`TagVariant`].
//!
//! # Hooks
//!
//! - `on_add`: fresh insertion only
//! - `on_overlap`: reapplication while active, no duration refresh
//! - `on_remove`: expiry or cure
mod base;
mod context;
mod factory;
mod kind;
mod variants;

pub use base::{BattleTag, TagVariant};
pub use context::TagContext;
pub use factory::create_tag;
pub use kind::{LapseCategory, TagKind};
