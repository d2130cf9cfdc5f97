//! Per-variant hook bodies dispatched from [`BattleTag`].

pub(crate) mod confusion;
pub(crate) mod drain;
pub(crate) mod drowsy;
pub(crate) mod hide;
pub(crate) mod interrupt;
pub(crate) mod protect;
pub(crate) mod recovery;

use super::{BattleTag, LapseCategory};

/// Firing rule for tags that last until cured.
///
/// A scheduled trigger always fires and leaves the counter alone. A custom
/// trigger goes through the base countdown and fires only if the tag
/// survives it.
fn fires_until_cured(tag: &mut BattleTag, trigger: LapseCategory) -> bool {
    trigger != LapseCategory::Custom || tag.count_down()
}

#[cfg(test)]
mod tests {
    use crate::action::{BattleAction, CommonAnim, TagMessage, TagNotice};
    use crate::state::{NonVolatileStatus, Side};
    use crate::tag::{LapseCategory, TagKind, create_tag};
    use crate::testing::{Harness, holder};

    const HEADS_TOP_ROLL: u32 = 15;
    const TAILS: u32 = 0;

    fn message(message: TagMessage) -> BattleAction {
        BattleAction::Message(TagNotice::new(Side::Player, message))
    }

    #[test]
    fn recharging_queues_empty_move_and_cancels_once() {
        let mut h = Harness::new(TAILS);
        let mut tag = create_tag(TagKind::Recharging, 0);

        tag.on_add(&mut h.ctx(holder(Side::Player)));
        assert_eq!(
            h.take_actions(),
            [BattleAction::QueueEmptyMove {
                target: Side::Player
            }]
        );

        let mut ctx = h.ctx(holder(Side::Player));
        assert!(!tag.lapse(&mut ctx, LapseCategory::MoveAttempt));
        assert!(ctx.move_cancelled());
        assert_eq!(h.take_actions(), [message(TagMessage::MustRecharge)]);
    }

    #[test]
    fn flinch_is_single_use() {
        let mut h = Harness::new(TAILS);
        let mut tag = create_tag(TagKind::Flinched, 0);

        let mut ctx = h.ctx(holder(Side::Player));
        assert!(!tag.lapse(&mut ctx, LapseCategory::MoveAttempt));
        assert!(ctx.move_cancelled());
        assert_eq!(tag.turns(), -1);
        assert_eq!(h.take_actions(), [message(TagMessage::Flinched)]);
    }

    #[test]
    fn confusion_self_hit_on_heads() {
        let mut h = Harness::new(HEADS_TOP_ROLL);
        let mut tag = create_tag(TagKind::Confused, 3);

        let mut ctx = h.ctx(holder(Side::Player));
        assert!(tag.lapse(&mut ctx, LapseCategory::MoveAttempt));
        assert!(ctx.move_cancelled());
        assert_eq!(tag.turns(), 2);
        assert_eq!(
            h.take_actions(),
            [
                BattleAction::Damage {
                    target: Side::Player,
                    amount: 20
                },
                message(TagMessage::HurtItselfInConfusion),
                BattleAction::Animation {
                    side: Side::Player,
                    anim: CommonAnim::Confusion
                },
                message(TagMessage::IsConfused),
            ]
        );
    }

    #[test]
    fn confusion_lets_move_through_on_tails() {
        let mut h = Harness::new(TAILS);
        let mut tag = create_tag(TagKind::Confused, 3);

        let mut ctx = h.ctx(holder(Side::Player));
        assert!(tag.lapse(&mut ctx, LapseCategory::MoveAttempt));
        assert!(!ctx.move_cancelled());
        assert_eq!(h.queue.len(), 2);
    }

    #[test]
    fn confusion_ignores_custom_trigger() {
        let mut h = Harness::new(HEADS_TOP_ROLL);
        let mut tag = create_tag(TagKind::Confused, 1);

        let mut ctx = h.ctx(holder(Side::Player));
        assert!(tag.lapse(&mut ctx, LapseCategory::Custom));
        assert!(!ctx.move_cancelled());
        assert_eq!(tag.turns(), 1);
        assert!(h.queue.is_empty());
    }

    #[test]
    fn confusion_expires_silently_on_last_turn() {
        let mut h = Harness::new(HEADS_TOP_ROLL);
        let mut tag = create_tag(TagKind::Confused, 1);

        let mut ctx = h.ctx(holder(Side::Player));
        assert!(!tag.lapse(&mut ctx, LapseCategory::MoveAttempt));
        assert!(!ctx.move_cancelled());
        assert!(h.queue.is_empty());
    }

    #[test]
    fn confusion_hooks_emit_distinct_messages() {
        let mut h = Harness::new(TAILS);
        let mut tag = create_tag(TagKind::Confused, 2);

        tag.on_add(&mut h.ctx(holder(Side::Player)));
        tag.on_overlap(&mut h.ctx(holder(Side::Player)));
        tag.on_remove(&mut h.ctx(holder(Side::Player)));

        assert_eq!(
            h.queue.messages().collect::<Vec<_>>(),
            [
                TagMessage::SnappedOutOfConfusion,
                TagMessage::AlreadyConfused,
                TagMessage::BecameConfused,
            ]
        );
    }

    #[test]
    fn seed_drains_holder_into_opponent_every_turn() {
        let mut h = Harness::new(TAILS);
        let mut tag = create_tag(TagKind::Seeded, 0);

        for _ in 0..3 {
            assert!(tag.lapse(&mut h.ctx(holder(Side::Player)), LapseCategory::AfterMove));
        }
        assert_eq!(tag.turns(), 1);

        let actions = h.take_actions();
        assert_eq!(actions.len(), 9);
        assert_eq!(
            actions[..3],
            [
                BattleAction::Heal {
                    target: Side::Enemy,
                    amount: 10,
                    notice: Some(TagNotice::new(Side::Player, TagMessage::HealthSapped)),
                    announce_full_hp: false,
                    skip_anim: true,
                },
                BattleAction::Damage {
                    target: Side::Player,
                    amount: 10
                },
                BattleAction::Animation {
                    side: Side::Enemy,
                    anim: CommonAnim::LeechSeed
                },
            ]
        );
    }

    #[test]
    fn seed_custom_trigger_uses_countdown() {
        let mut h = Harness::new(TAILS);
        let mut tag = create_tag(TagKind::Seeded, 0);

        assert!(!tag.lapse(&mut h.ctx(holder(Side::Player)), LapseCategory::Custom));
        assert!(h.queue.is_empty());
    }

    #[test]
    fn nightmare_takes_a_quarter() {
        let mut h = Harness::new(TAILS);
        let mut tag = create_tag(TagKind::Nightmare, 0);

        assert!(tag.lapse(&mut h.ctx(holder(Side::Enemy)), LapseCategory::AfterMove));
        assert_eq!(
            h.take_actions(),
            [
                BattleAction::Damage {
                    target: Side::Enemy,
                    amount: 20
                },
                BattleAction::Animation {
                    side: Side::Enemy,
                    anim: CommonAnim::Curse
                },
                BattleAction::Message(TagNotice::new(
                    Side::Enemy,
                    TagMessage::LockedInNightmare
                )),
            ]
        );

        tag.on_overlap(&mut h.ctx(holder(Side::Enemy)));
        assert_eq!(
            h.queue.messages().collect::<Vec<_>>(),
            [TagMessage::AlreadyInNightmare]
        );
    }

    #[test]
    fn ingrain_and_aqua_ring_heal_a_sixteenth() {
        let mut h = Harness::new(TAILS);
        let mut ingrain = create_tag(TagKind::Ingrain, 0);
        let mut ring = create_tag(TagKind::AquaRing, 0);

        assert!(ingrain.lapse(&mut h.ctx(holder(Side::Player)), LapseCategory::TurnEnd));
        assert!(ring.lapse(&mut h.ctx(holder(Side::Player)), LapseCategory::TurnEnd));

        let heals: Vec<_> = h
            .take_actions()
            .into_iter()
            .map(|action| match action {
                BattleAction::Heal {
                    amount, notice, ..
                } => (amount, notice.map(|n| n.message)),
                other => panic!("unexpected action {other:?}"),
            })
            .collect();
        assert_eq!(
            heals,
            [
                (5, Some(TagMessage::AquaRingRestored)),
                (5, Some(TagMessage::AbsorbedNutrients)),
            ]
        );
    }

    #[test]
    fn drowsy_falls_asleep_on_second_turn_end() {
        let mut h = Harness::new(TAILS);
        let mut tag = create_tag(TagKind::Drowsy, 0);

        assert!(tag.lapse(&mut h.ctx(holder(Side::Player)), LapseCategory::TurnEnd));
        assert!(h.queue.is_empty());

        assert!(!tag.lapse(&mut h.ctx(holder(Side::Player)), LapseCategory::TurnEnd));
        assert_eq!(
            h.take_actions(),
            [BattleAction::ObtainStatus {
                target: Side::Player,
                status: NonVolatileStatus::Sleep
            }]
        );
    }

    #[test]
    fn protect_check_always_succeeds() {
        let mut h = Harness::new(TAILS);
        let mut tag = create_tag(TagKind::Protected, 0);

        assert!(tag.lapse(&mut h.ctx(holder(Side::Player)), LapseCategory::Custom));
        assert!(tag.lapse(&mut h.ctx(holder(Side::Player)), LapseCategory::Custom));
        assert_eq!(tag.turns(), 0);
        assert_eq!(
            h.take_actions()[..2],
            [
                BattleAction::Animation {
                    side: Side::Player,
                    anim: CommonAnim::Protect
                },
                message(TagMessage::ProtectedItself),
            ]
        );
    }

    #[test]
    fn hidden_form_reveals_after_delay() {
        let mut h = Harness::new(TAILS);
        let mut tag = create_tag(TagKind::Flying, 1);

        tag.on_add(&mut h.ctx(holder(Side::Player)));
        tag.on_remove(&mut h.ctx(holder(Side::Player)));
        assert_eq!(
            h.take_actions(),
            [
                BattleAction::SetVisible {
                    target: Side::Player,
                    visible: true,
                    delay_frames: 2
                },
                BattleAction::SetVisible {
                    target: Side::Player,
                    visible: false,
                    delay_frames: 0
                },
            ]
        );
    }

    #[test]
    fn foreign_trigger_is_ignored() {
        let mut h = Harness::new(TAILS);
        let mut tag = create_tag(TagKind::Seeded, 0);

        assert!(tag.lapse(&mut h.ctx(holder(Side::Player)), LapseCategory::TurnEnd));
        assert_eq!(tag.turns(), 1);
        assert!(h.queue.is_empty());
    }

    #[test]
    fn non_positive_duration_expires_on_first_lapse() {
        let mut h = Harness::new(TAILS);
        let mut tag = create_tag(TagKind::BypassSleep, -3);

        assert!(!tag.lapse(&mut h.ctx(holder(Side::Player)), LapseCategory::TurnEnd));
    }
}
