//! In-memory measurement provider for a single row of items.
//!
//! Items are laid out left to right with a uniform gutter, and the scroll pane
//! is centred in the container between the two navigation overlays. Bounding
//! positions are derived from the pane width and scroll offset passed to
//! [`StripMeasurements::render`], so they describe the surface as it was last
//! drawn rather than the scroller's latest commit.

#![expect(
    clippy::float_arithmetic,
    reason = "strip geometry is computed in floating-point pixels"
)]

use super::measure::{DEFAULT_ELEMENT_SELECTOR, ElementSelector, ItemMetrics, MeasurementProvider};
use super::state::{PLACEHOLDER_PANE_WIDTH, ScrollState, overlay_width};

/// One element placed in the strip.
#[derive(Debug, Clone, PartialEq)]
struct StripElement {
    class_list: String,
    width: f64,
}

/// A measurable row of elements.
#[derive(Debug, Clone, PartialEq)]
pub struct StripMeasurements {
    container_width: f64,
    gutter: f64,
    elements: Vec<StripElement>,
    rendered_pane_width: f64,
    rendered_scroll_left: f64,
}

impl StripMeasurements {
    /// Creates an empty strip inside a container of `container_width`.
    #[must_use]
    pub const fn new(container_width: f64, gutter: f64) -> Self {
        Self {
            container_width,
            gutter,
            elements: Vec::new(),
            rendered_pane_width: PLACEHOLDER_PANE_WIDTH,
            rendered_scroll_left: 0.0,
        }
    }

    /// Adds `count` items of `width` tagged with the default item selector.
    #[must_use]
    pub fn with_items(mut self, count: usize, width: f64) -> Self {
        for _ in 0..count {
            self.push_element(DEFAULT_ELEMENT_SELECTOR, width);
        }
        self
    }

    /// Appends an element with the given class list and width.
    pub fn push_element(&mut self, class_list: impl Into<String>, width: f64) {
        self.elements.push(StripElement {
            class_list: class_list.into(),
            width,
        });
    }

    /// Removes every element from the strip.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Updates the container width after the host surface resized.
    pub const fn set_container_width(&mut self, width: f64) {
        self.container_width = width;
    }

    /// Records the pane width and scroll offset that were just drawn.
    pub const fn render(&mut self, pane_width: f64, scroll: &ScrollState) {
        self.rendered_pane_width = pane_width;
        self.rendered_scroll_left = scroll.scroll_left;
    }
}

impl MeasurementProvider for StripMeasurements {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn pane_left(&self) -> f64 {
        overlay_width(self.container_width, self.rendered_pane_width)
    }

    fn items(&self, selector: &ElementSelector) -> Vec<ItemMetrics> {
        let origin = self.pane_left() + self.rendered_scroll_left;
        let mut offset = 0.0;
        self.elements
            .iter()
            .filter(|element| selector.matches(&element.class_list))
            .map(|element| {
                let metrics = ItemMetrics {
                    width: element.width,
                    offset_left: offset,
                    bounding_left: origin + offset,
                };
                offset += element.width + self.gutter;
                metrics
            })
            .collect()
    }

    fn right_gutter(&self, _index: usize) -> f64 {
        self.gutter
    }
}
