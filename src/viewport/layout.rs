//! Layout calculation: how many items fit and where the window starts.
//!
//! Everything here is a pure function of the measurements, so the same inputs
//! always yield the same [`Window`].

use super::measure::{ElementSelector, MeasurementProvider};
use super::state::Window;

/// Tolerance added before flooring so that fits landing a hair under an
/// integer boundary still count the last item.
pub const EPSILON: f64 = 0.000_01;

/// Horizontal space reserved for the navigation controls by default.
pub const DEFAULT_CHROME_WIDTH: f64 = 60.0;

/// Measurements feeding one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    /// Number of items present.
    pub total_items: usize,
    /// Width of the representative (first) item.
    pub item_width: f64,
    /// Gutter to the right of the representative item.
    pub gutter_width: f64,
    /// Width of the whole container.
    pub viewport_width: f64,
    /// Space reserved for navigation controls.
    pub chrome_width: f64,
}

impl LayoutInput {
    /// Collects layout measurements from `provider`.
    ///
    /// Returns `None` when no element matches `selector`; there is nothing to
    /// lay out in that case.
    #[must_use]
    pub fn measure<P>(provider: &P, selector: &ElementSelector, chrome_width: f64) -> Option<Self>
    where
        P: MeasurementProvider + ?Sized,
    {
        let items = provider.items(selector);
        let first = items.first()?;
        Some(Self {
            total_items: items.len(),
            item_width: first.width,
            gutter_width: provider.right_gutter(0),
            viewport_width: provider.container_width(),
            chrome_width,
        })
    }
}

/// Computes the window for `input`.
///
/// Returns `None` when there are no items. Otherwise the window holds as many
/// items as fit (at least one, at most all of them) and is centred, with ties
/// rounding towards the earlier index.
///
/// # Examples
///
/// ```
/// use scroller::viewport::layout::{LayoutInput, compute_layout};
///
/// let window = compute_layout(&LayoutInput {
///     total_items: 10,
///     item_width: 200.0,
///     gutter_width: 20.0,
///     viewport_width: 1000.0,
///     chrome_width: 60.0,
/// })
/// .expect("ten items always produce a window");
///
/// assert_eq!(window.active_count(), 4);
/// assert_eq!(window.start_at(), 3);
/// ```
#[must_use]
pub fn compute_layout(input: &LayoutInput) -> Option<Window> {
    if input.total_items == 0 {
        return None;
    }

    let active_count = fit_count(input);
    let start_at = centered_start(input.total_items, active_count);
    let pane_width = pane_width(active_count, input.item_width, input.gutter_width);

    Some(Window::new(
        start_at,
        active_count,
        input.total_items,
        input.item_width,
        input.gutter_width,
        pane_width,
    ))
}

/// Number of items that fit side by side, clamped to `1..=total_items`.
///
/// Degenerate measurements resolve through the clamp: an infinite fit (zero
/// width items and gutter) shows everything, a negative or NaN fit shows one.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the fit is a ratio of pixel widths"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is floored first and saturating casts map NaN and negatives to zero"
)]
pub fn fit_count(input: &LayoutInput) -> usize {
    let available = input.viewport_width - input.chrome_width + input.gutter_width;
    let stride = input.item_width + input.gutter_width;
    let raw = (available / stride + EPSILON).floor();

    (raw as usize).clamp(1, input.total_items.max(1))
}

/// First index of a window of `active_count` items centred in `total_items`.
///
/// Halving an integer leaves at most `0.5`, so adding [`EPSILON`] before
/// flooring could never change the result and integer division is used.
#[must_use]
#[expect(
    clippy::integer_division,
    reason = "centering rounds towards the earlier index"
)]
pub const fn centered_start(total_items: usize, active_count: usize) -> usize {
    total_items.saturating_sub(active_count) / 2
}

/// Width spanned by `active_count` items and the gutters between them.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "pane width is a sum of pixel widths"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "item counts stay far below 2^52"
)]
pub fn pane_width(active_count: usize, item_width: f64, gutter_width: f64) -> f64 {
    let count = active_count as f64;
    count * item_width + (count - 1.0).max(0.0) * gutter_width
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
