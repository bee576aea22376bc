//! Deferred effect-phase work.
//!
//! Commits enqueue effects; the host drains them once the committed state has
//! been rendered. Every committed window gets its own notification, tagged
//! with the window it was committed with, so two steps taken before the
//! effect phase still report both states in order. Alignment only ever acts
//! on the latest window and is queued at most once.

use std::collections::VecDeque;

use super::state::Window;

/// Work to run after a commit has been rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Report the active flag of every item for the committed window.
    NotifyActive(Window),
    /// Shift the scroll offset so the first active item meets the pane edge.
    AlignFirstActive,
}

/// FIFO of pending effects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectQueue {
    pending: VecDeque<Effect>,
}

impl EffectQueue {
    /// Queues `effect`.
    ///
    /// Notifications are always queued. [`Effect::AlignFirstActive`] is
    /// dropped when one is already pending.
    pub fn push(&mut self, effect: Effect) {
        if effect == Effect::AlignFirstActive && self.pending.contains(&effect) {
            return;
        }
        self.pending.push_back(effect);
    }

    /// Removes and returns the oldest pending effect.
    pub fn pop(&mut self) -> Option<Effect> {
        self.pending.pop_front()
    }

    /// Drops every pending effect.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Returns true when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
