use crate::state::Side;

use super::context::TagContext;
use super::kind::{LapseCategory, TagKind};
use super::variants;

/// Behaviour a tag runs on top of the base countdown.
///
/// The set is closed; hooks dispatch on it with a single `match`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagVariant {
    /// Countdown only, no side effects.
    Counted,
    Recharging,
    Flinched,
    Confused,
    Seeded,
    Nightmare,
    Ingrain,
    AquaRing,
    Drowsy,
    Protected,
    /// Hides the holder while active (fly, dig).
    HideSprite,
}

/// An active temporary condition on one combatant.
///
/// Tags are built by [`create_tag`](super::create_tag) and only change
/// through their own hooks, which the registry invokes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleTag {
    kind: TagKind,
    variant: TagVariant,
    category: LapseCategory,
    /// Remaining turns. May start at zero or below; such a tag expires on
    /// its first lapse.
    turns: i32,
    source: Option<Side>,
}

impl BattleTag {
    pub(crate) fn new(
        kind: TagKind,
        variant: TagVariant,
        category: LapseCategory,
        turns: i32,
    ) -> Self {
        Self {
            kind,
            variant,
            category,
            turns,
            source: None,
        }
    }

    #[must_use]
    pub(crate) fn with_source(mut self, source: Option<Side>) -> Self {
        self.source = source;
        self
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn variant(&self) -> TagVariant {
        self.variant
    }

    pub fn category(&self) -> LapseCategory {
        self.category
    }

    pub fn turns(&self) -> i32 {
        self.turns
    }

    /// Combatant whose move or ability applied this tag, if known.
    pub fn source(&self) -> Option<Side> {
        self.source
    }

    /// Base lapse: one turn passes. Returns whether the tag stays active.
    pub(crate) fn count_down(&mut self) -> bool {
        self.turns = self.turns.saturating_sub(1);
        self.turns > 0
    }

    pub(crate) fn on_add(&mut self, ctx: &mut TagContext<'_>) {
        match self.variant {
            TagVariant::Recharging => variants::interrupt::recharging_on_add(ctx),
            TagVariant::Confused => variants::confusion::on_add(ctx),
            TagVariant::Seeded => variants::drain::seeded_on_add(ctx),
            TagVariant::Nightmare => variants::drain::nightmare_on_add(ctx),
            TagVariant::Ingrain => variants::recovery::ingrain_on_add(ctx),
            TagVariant::AquaRing => variants::recovery::aqua_ring_on_add(ctx),
            TagVariant::Drowsy => variants::drowsy::on_add(ctx),
            TagVariant::Protected => variants::protect::on_add(ctx),
            TagVariant::HideSprite => variants::hide::on_add(ctx),
            TagVariant::Counted | TagVariant::Flinched => {}
        }
    }

    /// Reapplication while active. The remaining turns are left untouched.
    pub(crate) fn on_overlap(&mut self, ctx: &mut TagContext<'_>) {
        match self.variant {
            TagVariant::Confused => variants::confusion::on_overlap(ctx),
            TagVariant::Nightmare => variants::drain::nightmare_on_overlap(ctx),
            _ => {}
        }
    }

    pub(crate) fn on_remove(&mut self, ctx: &mut TagContext<'_>) {
        match self.variant {
            TagVariant::Confused => variants::confusion::on_remove(ctx),
            TagVariant::HideSprite => variants::hide::on_remove(ctx),
            _ => {}
        }
    }

    /// Evaluates the tag at a timing point.
    ///
    /// Returns `false` when the tag has expired and must be removed. A
    /// trigger that is neither this tag's category nor
    /// [`LapseCategory::Custom`] is ignored: nothing happens and the tag
    /// stays.
    pub fn lapse(&mut self, ctx: &mut TagContext<'_>, trigger: LapseCategory) -> bool {
        if trigger != self.category && trigger != LapseCategory::Custom {
            return true;
        }

        match self.variant {
            TagVariant::Counted => self.count_down(),
            TagVariant::Recharging => variants::interrupt::recharging_lapse(self, ctx),
            TagVariant::Flinched => variants::interrupt::flinched_lapse(self, ctx),
            TagVariant::Confused => variants::confusion::lapse(self, ctx, trigger),
            TagVariant::Seeded => variants::drain::seeded_lapse(self, ctx, trigger),
            TagVariant::Nightmare => variants::drain::nightmare_lapse(self, ctx, trigger),
            TagVariant::Ingrain => variants::recovery::ingrain_lapse(self, ctx, trigger),
            TagVariant::AquaRing => variants::recovery::aqua_ring_lapse(self, ctx, trigger),
            TagVariant::Drowsy => variants::drowsy::lapse(self, ctx),
            TagVariant::Protected => variants::protect::lapse(ctx),
            TagVariant::HideSprite => self.count_down(),
        }
    }
}
