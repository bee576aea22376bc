//! Active-range notifications.
//!
//! After every settled state change the host learns, item by item, whether
//! each item is inside the window.

use super::state::Window;

/// Receives per-item active flags.
#[cfg_attr(test, mockall::automock)]
pub trait ActiveSink {
    /// Marks the item at `index` as active or inactive.
    fn set_item_active(&mut self, index: usize, active: bool);
}

impl<F> ActiveSink for F
where
    F: FnMut(usize, bool),
{
    fn set_item_active(&mut self, index: usize, active: bool) {
        self(index, active);
    }
}

/// Reports the active flag of every index in `0..total_items`, in order.
///
/// Each index is reported exactly once. Returns the number of indices
/// reported.
pub fn notify_active_range<S>(window: &Window, total_items: usize, sink: &mut S) -> usize
where
    S: ActiveSink + ?Sized,
{
    for index in 0..total_items {
        sink.set_item_active(index, window.contains(index));
    }
    total_items
}

/// Sink that remembers the most recent flag for every index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFlags {
    flags: Vec<bool>,
}

impl ActiveFlags {
    /// Returns the last flag reported for `index`, or `false` if none was.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Number of indices reported so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns true when nothing has been reported.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Indices currently flagged active, in ascending order.
    #[must_use]
    pub fn active_indices(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(index, &active)| active.then_some(index))
            .collect()
    }
}

impl ActiveSink for ActiveFlags {
    fn set_item_active(&mut self, index: usize, active: bool) {
        if index >= self.flags.len() {
            self.flags.resize(index.saturating_add(1), false);
        }
        if let Some(flag) = self.flags.get_mut(index) {
            *flag = active;
        }
    }
}
