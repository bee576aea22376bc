//! State records owned by a single scroller instance.
//!
//! A [`Window`] is replaced wholesale by relayout and stepped incrementally by
//! navigation. A [`ScrollState`] tracks the cumulative translation applied to
//! the scrolled pane. Neither type is shared between instances.

/// Pane width reported before the first layout settles (three 200px items).
pub const PLACEHOLDER_PANE_WIDTH: f64 = 600.0;

/// The contiguous range of items that is currently visible.
///
/// ## Invariants
///
/// - `active_count >= 1`
/// - `start_at + active_count <= total_items`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    start_at: usize,
    active_count: usize,
    total_items: usize,
    pane_width: f64,
    item_width: f64,
    gutter_width: f64,
}

impl Window {
    /// Builds a window from already-validated layout values.
    pub(crate) const fn new(
        start_at: usize,
        active_count: usize,
        total_items: usize,
        item_width: f64,
        gutter_width: f64,
        pane_width: f64,
    ) -> Self {
        Self {
            start_at,
            active_count,
            total_items,
            pane_width,
            item_width,
            gutter_width,
        }
    }

    /// Index of the first visible item.
    #[must_use]
    pub const fn start_at(&self) -> usize {
        self.start_at
    }

    /// Number of items visible at once.
    #[must_use]
    pub const fn active_count(&self) -> usize {
        self.active_count
    }

    /// Number of items measured when the window was laid out.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Width spanned by the active items and their interior gutters.
    #[must_use]
    pub const fn pane_width(&self) -> f64 {
        self.pane_width
    }

    /// Representative item width used for the layout.
    #[must_use]
    pub const fn item_width(&self) -> f64 {
        self.item_width
    }

    /// Gutter width used for the layout.
    #[must_use]
    pub const fn gutter_width(&self) -> f64 {
        self.gutter_width
    }

    /// Exclusive end of the visible range.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start_at.saturating_add(self.active_count)
    }

    /// Returns true when `index` lies inside the visible range.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start_at && index < self.end()
    }

    /// Largest start index that still keeps the whole window in bounds.
    #[must_use]
    pub const fn last_start(&self) -> usize {
        self.total_items.saturating_sub(self.active_count)
    }

    /// Width of each navigation overlay flanking the pane.
    #[must_use]
    pub fn nav_overlay_width(&self, container_width: f64) -> f64 {
        overlay_width(container_width, self.pane_width)
    }

    /// Returns the same window moved to start at `start_at`.
    pub(crate) const fn with_start_at(self, start_at: usize) -> Self {
        Self { start_at, ..self }
    }

    /// Returns the same window moved as close to `start_at` as the bounds
    /// allow.
    pub(crate) const fn with_start_clamped(self, start_at: usize) -> Self {
        let last = self.last_start();
        let clamped = if start_at > last { last } else { start_at };
        self.with_start_at(clamped)
    }
}

/// Width of each overlay when a pane of `pane_width` is centred in the
/// container.
///
/// The overlays split whatever the pane leaves of the container, so a
/// container narrower than the pane yields zero.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "overlay widths are derived from pixel geometry"
)]
pub fn overlay_width(container_width: f64, pane_width: f64) -> f64 {
    ((container_width - pane_width) / 2.0).max(0.0)
}

/// Translation applied to the scrolled pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Cumulative horizontal offset of the scrolled pane, in pixels.
    pub scroll_left: f64,
    /// True until the first layout has been committed.
    pub initializing: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scroll_left: 0.0,
            initializing: true,
        }
    }
}

impl ScrollState {
    /// Returns the state shifted by `delta` pixels.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "scroll offsets accumulate deltas")]
    pub fn shifted(self, delta: f64) -> Self {
        Self {
            scroll_left: self.scroll_left + delta,
            ..self
        }
    }
}

#[cfg(test)]
#[expect(clippy::float_arithmetic, reason = "assertions compare pixel offsets")]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn window() -> Window {
        Window::new(3, 4, 10, 200.0, 20.0, 860.0)
    }

    #[rstest]
    #[case::before_start(2, false)]
    #[case::first(3, true)]
    #[case::last(6, true)]
    #[case::past_end(7, false)]
    fn contains_matches_half_open_range(window: Window, #[case] index: usize, #[case] expected: bool) {
        assert_eq!(window.contains(index), expected);
    }

    #[rstest]
    fn end_is_exclusive(window: Window) {
        assert_eq!(window.end(), 7);
        assert_eq!(window.last_start(), 6);
    }

    #[rstest]
    #[case::inside(5, 5)]
    #[case::beyond_last(9, 6)]
    #[case::zero(0, 0)]
    fn with_start_clamped_keeps_window_in_bounds(
        window: Window,
        #[case] requested: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(window.with_start_clamped(requested).start_at(), expected);
    }

    #[rstest]
    fn nav_overlay_splits_leftover_space(window: Window) {
        assert!((window.nav_overlay_width(1000.0) - 70.0).abs() < f64::EPSILON);
        assert!(window.nav_overlay_width(500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scroll_state_starts_initializing() {
        let state = ScrollState::default();
        assert!(state.initializing);
        assert!(state.scroll_left.abs() < f64::EPSILON);
    }

    #[test]
    fn shifted_accumulates_delta() {
        let state = ScrollState::default().shifted(-220.0).shifted(-220.0);
        assert!((state.scroll_left + 440.0).abs() < f64::EPSILON);
        assert!(state.initializing);
    }
}
