use crate::action::{ActionQueue, BattleAction, CommonAnim, TagMessage, TagNotice};
use crate::config::BattleConfig;
use crate::env::RollSource;
use crate::state::{HolderStats, Side};

/// Everything a tag hook may read or produce.
///
/// Built by the host for one holder at one timing point. Hooks push actions
/// onto the borrowed queue and may raise the move-cancel flag; they cannot
/// reach the opponent's state or its pending move.
pub struct TagContext<'a> {
    holder: HolderStats,
    rolls: RollSource<'a>,
    queue: &'a mut ActionQueue,
    config: &'a BattleConfig,
    move_cancelled: bool,
}

impl<'a> TagContext<'a> {
    pub fn new(
        holder: HolderStats,
        rolls: RollSource<'a>,
        queue: &'a mut ActionQueue,
        config: &'a BattleConfig,
    ) -> Self {
        Self {
            holder,
            rolls,
            queue,
            config,
            move_cancelled: false,
        }
    }

    pub fn holder(&self) -> &HolderStats {
        &self.holder
    }

    pub fn side(&self) -> Side {
        self.holder.side
    }

    pub fn opponent(&self) -> Side {
        self.holder.side.opposite()
    }

    pub fn config(&self) -> &'a BattleConfig {
        self.config
    }

    pub fn rolls(&mut self) -> &mut RollSource<'a> {
        &mut self.rolls
    }

    /// Queues an action ahead of everything already pending.
    pub fn push(&mut self, action: BattleAction) {
        self.queue.unshift(action);
    }

    /// Queues a message about the holder.
    pub fn notify(&mut self, message: TagMessage) {
        let notice = TagNotice::new(self.side(), message);
        self.push(BattleAction::Message(notice));
    }

    pub fn animate(&mut self, side: Side, anim: CommonAnim) {
        self.push(BattleAction::Animation { side, anim });
    }

    /// Cancels the holder's pending move.
    pub fn cancel_move(&mut self) {
        self.move_cancelled = true;
    }

    pub fn move_cancelled(&self) -> bool {
        self.move_cancelled
    }

    /// Reads and clears the cancel flag.
    pub fn take_move_cancelled(&mut self) -> bool {
        core::mem::take(&mut self.move_cancelled)
    }

    /// Pending actions, in run order.
    pub fn queue(&self) -> &ActionQueue {
        &*self.queue
    }
}
