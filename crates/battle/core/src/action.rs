//! Declarative side effects produced by tag hooks.
//!
//! Hooks never mutate the battle. They describe what should happen as
//! [`BattleAction`]s and push them onto the host's [`ActionQueue`]. The queue
//! keeps the front-insertion discipline of a phase stack: the action pushed
//! last runs first.

use std::collections::VecDeque;

use crate::state::{NonVolatileStatus, Side};

/// Battle text a tag asks the presentation layer to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TagMessage {
    MustRecharge,
    Flinched,
    BecameConfused,
    AlreadyConfused,
    IsConfused,
    HurtItselfInConfusion,
    SnappedOutOfConfusion,
    WasSeeded,
    HealthSapped,
    BeganNightmare,
    AlreadyInNightmare,
    LockedInNightmare,
    PlantedRoots,
    AbsorbedNutrients,
    SurroundedByWaterVeil,
    AquaRingRestored,
    GrewDrowsy,
    ProtectedItself,
}

/// A message together with the combatant it is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagNotice {
    pub subject: Side,
    pub message: TagMessage,
}

impl TagNotice {
    pub const fn new(subject: Side, message: TagMessage) -> Self {
        Self { subject, message }
    }
}

/// Shared battle animations played by tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CommonAnim {
    Confusion,
    LeechSeed,
    Curse,
    Protect,
}

/// One follow-up step requested by a tag hook.
///
/// Targets are absolute sides, so one queue can collect actions from both
/// combatants' registries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleAction {
    Message(TagNotice),

    Animation {
        /// Side whose sprite anchors the animation.
        side: Side,
        anim: CommonAnim,
    },

    /// Remove HP. The interpreter saturates at zero.
    Damage { target: Side, amount: u32 },

    /// Restore HP. The interpreter clamps at the target's max HP.
    Heal {
        target: Side,
        amount: u32,
        notice: Option<TagNotice>,
        /// Announce when the target is already at full HP.
        announce_full_hp: bool,
        skip_anim: bool,
    },

    /// Inflict a major status through the target's status path.
    ObtainStatus {
        target: Side,
        status: NonVolatileStatus,
    },

    SetVisible {
        target: Side,
        visible: bool,
        delay_frames: u32,
    },

    /// Force an empty move onto the target's move queue.
    QueueEmptyMove { target: Side },
}

/// Ordered list of pending actions with front insertion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionQueue {
    actions: VecDeque<BattleAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts at the front: the newest action runs first.
    pub fn unshift(&mut self, action: BattleAction) {
        self.actions.push_front(action);
    }

    /// Takes the next action to run.
    pub fn pop(&mut self) -> Option<BattleAction> {
        self.actions.pop_front()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Pending actions in run order.
    pub fn iter(&self) -> impl Iterator<Item = &BattleAction> {
        self.actions.iter()
    }

    /// Messages in run order, ignoring every other action.
    pub fn messages(&self) -> impl Iterator<Item = TagMessage> + '_ {
        self.actions.iter().filter_map(|action| match action {
            BattleAction::Message(notice) => Some(notice.message),
            _ => None,
        })
    }
}

impl IntoIterator for ActionQueue {
    type Item = BattleAction;
    type IntoIter = std::collections::vec_deque::IntoIter<BattleAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}
