//! Measurement capability consumed by the scroller core.
//!
//! The core never inspects a rendering surface directly. Hosts implement
//! [`MeasurementProvider`] over whatever they draw to, and layout, navigation
//! and alignment only ever see the numbers it returns.

/// Selector used by the default configuration to locate scroller items.
pub const DEFAULT_ELEMENT_SELECTOR: &str = "scroller__item";

/// Locates item elements inside the scroller container.
///
/// Matching is substring-based against an element's class list, so a selector
/// of `card` matches `scroller__item card`. An empty selector matches every
/// element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSelector(String);

impl ElementSelector {
    /// Creates a selector from a pattern.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Returns the raw selector pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when an element tagged with `class_list` is selected.
    #[must_use]
    pub fn matches(&self, class_list: &str) -> bool {
        class_list.contains(self.0.as_str())
    }
}

impl Default for ElementSelector {
    fn default() -> Self {
        Self::new(DEFAULT_ELEMENT_SELECTOR)
    }
}

/// Geometry of one item as measured after the most recent render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
    /// Rendered width of the item.
    pub width: f64,
    /// Offset of the item's left edge from the start of the sequence.
    pub offset_left: f64,
    /// Left edge of the item in container coordinates, including the current
    /// scroll translation.
    pub bounding_left: f64,
}

/// Supplies measurements of the scroller container and its items.
///
/// Implementations report the state of the surface as last rendered. The
/// scroller's effect phase relies on this: it queries bounding positions only
/// after the host has rendered the committed state.
#[cfg_attr(test, mockall::automock)]
pub trait MeasurementProvider {
    /// Width of the whole container, navigation chrome included.
    fn container_width(&self) -> f64;

    /// Left edge of the scroll pane in container coordinates.
    fn pane_left(&self) -> f64;

    /// Ordered list of item elements matching `selector`.
    fn items(&self, selector: &ElementSelector) -> Vec<ItemMetrics>;

    /// Gutter between the item at `index` and its right-hand neighbour.
    fn right_gutter(&self, index: usize) -> f64;
}
