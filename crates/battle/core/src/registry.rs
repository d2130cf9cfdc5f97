//! Per-combatant tag registry.
//!
//! The registry is the only caller of tag hooks. It guarantees one tag per
//! kind, dispatches lapses by category in insertion order and removes a tag
//! only when its lapse reports expiry or the host removes it explicitly.

use arrayvec::ArrayVec;
use tracing::{debug, trace, warn};

use crate::config::BattleConfig;
use crate::state::Side;
use crate::tag::{BattleTag, LapseCategory, TagContext, TagKind, create_tag};

/// Result of one category dispatch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LapseOutcome {
    /// Number of tags whose lapse ran.
    pub lapsed: usize,
    /// Kinds that expired and were removed, in dispatch order.
    pub expired: ArrayVec<TagKind, { BattleConfig::MAX_TAGS }>,
    /// Whether a tag cancelled the holder's pending move.
    pub move_cancelled: bool,
}

/// Active tags of one combatant, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BattleTags {
    tags: ArrayVec<BattleTag, { BattleConfig::MAX_TAGS }>,
}

impl BattleTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a tag.
    ///
    /// Returns `true` if a fresh tag was inserted (`on_add` fired) and
    /// `false` if the kind was already active (`on_overlap` fired, nothing
    /// inserted, duration unchanged).
    pub fn add(
        &mut self,
        kind: TagKind,
        turns: i32,
        source: Option<Side>,
        ctx: &mut TagContext<'_>,
    ) -> bool {
        if let Some(existing) = self.tags.iter_mut().find(|tag| tag.kind() == kind) {
            debug!(side = ?ctx.side(), %kind, turns = existing.turns(), "tag overlap");
            existing.on_overlap(ctx);
            return false;
        }

        // One slot per kind: a kind not yet held always fits.
        debug_assert!(!self.tags.is_full(), "registry full without holding {kind}");
        if self.tags.is_full() {
            warn!(side = ?ctx.side(), %kind, "tag registry full, add dropped");
            return false;
        }

        let mut tag = create_tag(kind, turns).with_source(source);
        tag.on_add(ctx);
        debug!(
            side = ?ctx.side(),
            %kind,
            category = %tag.category(),
            turns = tag.turns(),
            ?source,
            "tag added"
        );
        self.tags.push(tag);
        true
    }

    /// Removes a tag, firing `on_remove`. Returns whether it was present.
    pub fn remove(&mut self, kind: TagKind, ctx: &mut TagContext<'_>) -> bool {
        let Some(index) = self.position(kind) else {
            return false;
        };
        let mut tag = self.tags.remove(index);
        tag.on_remove(ctx);
        debug!(side = ?ctx.side(), %kind, "tag removed");
        true
    }

    /// Lapses every tag registered for `category`.
    ///
    /// Tags of other categories are not touched. A tag whose lapse returns
    /// `false` is removed and its `on_remove` fires immediately, before the
    /// next tag lapses.
    pub fn lapse(&mut self, category: LapseCategory, ctx: &mut TagContext<'_>) -> LapseOutcome {
        let mut outcome = LapseOutcome::default();
        let mut index = 0;

        while index < self.tags.len() {
            let tag = &mut self.tags[index];
            if tag.category() != category {
                index += 1;
                continue;
            }

            outcome.lapsed += 1;
            let kind = tag.kind();
            let active = tag.lapse(ctx, category);
            trace!(side = ?ctx.side(), %kind, %category, active, "tag lapsed");

            if active {
                index += 1;
            } else {
                let mut expired = self.tags.remove(index);
                expired.on_remove(ctx);
                debug!(side = ?ctx.side(), %kind, "tag expired");
                outcome.expired.push(kind);
            }
        }

        outcome.move_cancelled = ctx.take_move_cancelled();
        outcome
    }

    /// Ad-hoc evaluation of one tag with [`LapseCategory::Custom`],
    /// whatever its own category.
    ///
    /// Removes the tag if it reports expiry. Returns whether the tag was
    /// present.
    pub fn lapse_tag(&mut self, kind: TagKind, ctx: &mut TagContext<'_>) -> bool {
        let Some(index) = self.position(kind) else {
            return false;
        };

        let active = self.tags[index].lapse(ctx, LapseCategory::Custom);
        trace!(side = ?ctx.side(), %kind, active, "custom lapse");
        if !active {
            let mut expired = self.tags.remove(index);
            expired.on_remove(ctx);
            debug!(side = ?ctx.side(), %kind, "tag expired");
        }
        true
    }

    /// Removes every tag without lapsing it (faint, switch-out).
    pub fn clear(&mut self, ctx: &mut TagContext<'_>) {
        for mut tag in self.tags.drain(..) {
            tag.on_remove(ctx);
        }
        debug!(side = ?ctx.side(), "tags cleared");
    }

    pub fn get(&self, kind: TagKind) -> Option<&BattleTag> {
        self.tags.iter().find(|tag| tag.kind() == kind)
    }

    pub fn contains(&self, kind: TagKind) -> bool {
        self.get(kind).is_some()
    }

    /// First tag matching `predicate`, in insertion order.
    pub fn find(&self, predicate: impl Fn(&BattleTag) -> bool) -> Option<&BattleTag> {
        self.tags.iter().find(|tag| predicate(tag))
    }

    pub fn iter(&self) -> impl Iterator<Item = &BattleTag> {
        self.tags.iter()
    }

    pub fn kinds(&self) -> impl Iterator<Item = TagKind> + '_ {
        self.tags.iter().map(BattleTag::kind)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn position(&self, kind: TagKind) -> Option<usize> {
        self.tags.iter().position(|tag| tag.kind() == kind)
    }
}
