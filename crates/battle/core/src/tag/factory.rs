use super::base::{BattleTag, TagVariant};
use super::kind::{LapseCategory, TagKind};

/// Builds the tag for `kind`.
///
/// `turns` is used only by kinds whose duration the caller chooses
/// (confusion, hidden forms, counted modifiers); the others have a fixed
/// duration. Kinds without a dedicated behaviour become a plain counted tag
/// evaluated on [`LapseCategory::Custom`], so this never fails.
pub fn create_tag(kind: TagKind, turns: i32) -> BattleTag {
    use LapseCategory as L;

    match kind {
        TagKind::Recharging => BattleTag::new(kind, TagVariant::Recharging, L::MoveAttempt, 1),
        TagKind::Flinched => BattleTag::new(kind, TagVariant::Flinched, L::MoveAttempt, 0),
        TagKind::Confused => BattleTag::new(kind, TagVariant::Confused, L::MoveAttempt, turns),
        TagKind::Seeded => BattleTag::new(kind, TagVariant::Seeded, L::AfterMove, 1),
        TagKind::Nightmare => BattleTag::new(kind, TagVariant::Nightmare, L::AfterMove, 1),
        TagKind::Ingrain => BattleTag::new(kind, TagVariant::Ingrain, L::TurnEnd, 1),
        TagKind::AquaRing => BattleTag::new(kind, TagVariant::AquaRing, L::TurnEnd, 1),
        TagKind::Drowsy => BattleTag::new(kind, TagVariant::Drowsy, L::TurnEnd, 2),
        TagKind::Protected => BattleTag::new(kind, TagVariant::Protected, L::Custom, 0),
        TagKind::Flying | TagKind::Underground => {
            BattleTag::new(kind, TagVariant::HideSprite, L::MoveEffect, turns)
        }
        TagKind::NoCrit => BattleTag::new(kind, TagVariant::Counted, L::AfterMove, turns),
        TagKind::BypassSleep | TagKind::IgnoreFlying => {
            BattleTag::new(kind, TagVariant::Counted, L::TurnEnd, turns)
        }
        _ => BattleTag::new(kind, TagVariant::Counted, L::Custom, turns),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn fixed_durations_ignore_caller() {
        assert_eq!(create_tag(TagKind::Recharging, 9).turns(), 1);
        assert_eq!(create_tag(TagKind::Flinched, 9).turns(), 0);
        assert_eq!(create_tag(TagKind::Seeded, 9).turns(), 1);
        assert_eq!(create_tag(TagKind::Drowsy, 9).turns(), 2);
        assert_eq!(create_tag(TagKind::Protected, 9).turns(), 0);
    }

    #[test]
    fn caller_durations_are_kept() {
        assert_eq!(create_tag(TagKind::Confused, 4).turns(), 4);
        assert_eq!(create_tag(TagKind::Underground, 2).turns(), 2);
        assert_eq!(create_tag(TagKind::NoCrit, -1).turns(), -1);
    }

    #[test]
    fn categories_follow_the_table() {
        let expected = [
            (TagKind::Recharging, LapseCategory::MoveAttempt),
            (TagKind::Flinched, LapseCategory::MoveAttempt),
            (TagKind::Confused, LapseCategory::MoveAttempt),
            (TagKind::Seeded, LapseCategory::AfterMove),
            (TagKind::Nightmare, LapseCategory::AfterMove),
            (TagKind::Frenzy, LapseCategory::Custom),
            (TagKind::Ingrain, LapseCategory::TurnEnd),
            (TagKind::AquaRing, LapseCategory::TurnEnd),
            (TagKind::Drowsy, LapseCategory::TurnEnd),
            (TagKind::Protected, LapseCategory::Custom),
            (TagKind::Flying, LapseCategory::MoveEffect),
            (TagKind::Underground, LapseCategory::MoveEffect),
            (TagKind::NoCrit, LapseCategory::AfterMove),
            (TagKind::BypassSleep, LapseCategory::TurnEnd),
            (TagKind::IgnoreFlying, LapseCategory::TurnEnd),
        ];
        assert_eq!(expected.len(), TagKind::iter().count());

        for (kind, category) in expected {
            let tag = create_tag(kind, 3);
            assert_eq!(tag.kind(), kind);
            assert_eq!(tag.category(), category, "{kind}");
        }
    }

    #[test]
    fn unmapped_kind_falls_back_to_counted_custom() {
        let tag = create_tag(TagKind::Frenzy, 3);
        assert_eq!(tag.variant(), TagVariant::Counted);
        assert_eq!(tag.category(), LapseCategory::Custom);
        assert_eq!(tag.turns(), 3);
    }
}
