//! Step navigation and scroll alignment.
//!
//! Moving the window never triggers a relayout. A step only compares the
//! offsets of the old and new first items, so its cost does not depend on how
//! many items are visible.

use super::measure::ItemMetrics;
use super::state::{ScrollState, Window};

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards lower indices.
    Backward,
    /// Towards higher indices.
    Forward,
}

impl Direction {
    /// Signed index offset of one step.
    #[must_use]
    pub const fn offset(self) -> isize {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// Returns true when a window starting at `index` fits inside the items.
///
/// Both the first and the last item of the moved window must be valid
/// indices.
#[must_use]
pub const fn can_scroll_to(window: &Window, index: usize) -> bool {
    match index.checked_add(window.active_count()) {
        Some(end) => index < window.total_items() && end <= window.total_items(),
        None => false,
    }
}

/// Moves `window` to start at `target`.
///
/// Returns `None`, leaving the caller's state untouched, when the target
/// equals the current start, is out of range, or either boundary item is
/// missing from `items`. The returned scroll state has been shifted by the
/// distance between the previous and the new first item.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the step delta is a difference of pixel offsets"
)]
pub fn scroll_to(
    window: &Window,
    scroll: &ScrollState,
    target: usize,
    items: &[ItemMetrics],
) -> Option<(Window, ScrollState)> {
    if target == window.start_at() || !can_scroll_to(window, target) {
        return None;
    }

    let previous = items.get(window.start_at())?;
    let next = items.get(target)?;
    let delta = previous.offset_left - next.offset_left;

    Some((window.with_start_at(target), scroll.shifted(delta)))
}

/// Moves `window` one item in `direction`.
///
/// Stepping backwards from the first item is a no-op, like any other
/// out-of-range target.
#[must_use]
pub fn scroll_by(
    window: &Window,
    scroll: &ScrollState,
    direction: Direction,
    items: &[ItemMetrics],
) -> Option<(Window, ScrollState)> {
    let target = window.start_at().checked_add_signed(direction.offset())?;
    scroll_to(window, scroll, target, items)
}

/// Shifts `scroll` so the first active item lines up with the pane's left
/// edge.
///
/// `pane_left` and the items' bounding positions must describe the surface
/// after the committed window has been rendered.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "alignment is a difference of rendered positions"
)]
pub fn align_to_first_active(
    window: &Window,
    scroll: &ScrollState,
    pane_left: f64,
    items: &[ItemMetrics],
) -> Option<ScrollState> {
    let first = items.get(window.start_at())?;
    Some(scroll.shifted(pane_left - first.bounding_left))
}
