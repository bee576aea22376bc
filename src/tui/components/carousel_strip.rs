//! Carousel strip component for the row of cards.
//!
//! The strip is drawn as one terminal row: a left navigation overlay, the
//! clipped scroll pane, and a right navigation overlay. Cards inside the
//! active range are drawn with square brackets, the rest with parentheses.

use crate::viewport::ActiveFlags;

use super::text_columns::{centre_in_width, slice_columns};

const BACK_GLYPH: &str = "◀";
const FORWARD_GLYPH: &str = "▶";

/// Context for rendering the carousel strip.
#[derive(Debug, Clone)]
pub struct CarouselStripViewContext<'a> {
    /// Card labels, in order.
    pub labels: &'a [String],
    /// Active flags as last reported by the scroller.
    pub active: &'a ActiveFlags,
    /// Width of every card in columns.
    pub item_width: usize,
    /// Columns between neighbouring cards.
    pub gutter: usize,
    /// Width of the whole row.
    pub container_width: usize,
    /// Width of the scroll pane.
    pub pane_width: usize,
    /// Width of the back overlay; the forward overlay takes the remainder.
    pub overlay_width: usize,
    /// Columns of the strip scrolled out to the left of the pane.
    pub scroll_offset: usize,
    /// Whether the back overlay should show its arrow.
    pub can_scroll_back: bool,
    /// Whether the forward overlay should show its arrow.
    pub can_scroll_forward: bool,
}

/// Component for displaying the scrolling row of cards.
#[derive(Debug, Clone, Default)]
pub struct CarouselStripComponent;

impl CarouselStripComponent {
    /// Creates a new carousel strip component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the strip as a single newline-terminated row.
    ///
    /// The back overlay takes `overlay_width` columns and the forward overlay
    /// whatever the pane leaves after it. A pane wider than the container is
    /// clipped on the right and both overlays collapse.
    #[must_use]
    pub fn view(&self, ctx: &CarouselStripViewContext<'_>) -> String {
        if ctx.labels.is_empty() {
            return "  No items to scroll.\n".to_owned();
        }

        let pane_width = ctx.pane_width.min(ctx.container_width);
        let left_width = ctx
            .overlay_width
            .min(ctx.container_width.saturating_sub(pane_width));
        let right_width = ctx
            .container_width
            .saturating_sub(pane_width)
            .saturating_sub(left_width);

        let strip = Self::render_cards(ctx);
        let pane = slice_columns(&strip, ctx.scroll_offset, pane_width);

        let mut output = overlay(left_width, BACK_GLYPH, ctx.can_scroll_back);
        output.push_str(&pane);
        output.push_str(&overlay(right_width, FORWARD_GLYPH, ctx.can_scroll_forward));
        output.push('\n');
        output
    }

    /// Lays every card out left to right, separated by the gutter.
    fn render_cards(ctx: &CarouselStripViewContext<'_>) -> String {
        let inner_width = ctx.item_width.saturating_sub(2);
        let gutter = " ".repeat(ctx.gutter);

        ctx.labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let (open, close) = if ctx.active.is_active(index) {
                    ('[', ']')
                } else {
                    ('(', ')')
                };
                format!("{open}{}{close}", centre_in_width(label, inner_width))
            })
            .collect::<Vec<_>>()
            .join(&gutter)
    }
}

fn overlay(width: usize, glyph: &str, enabled: bool) -> String {
    if enabled {
        centre_in_width(glyph, width)
    } else {
        " ".repeat(width)
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::viewport::ActiveSink;

    #[fixture]
    fn labels() -> Vec<String> {
        ["Mercury", "Venus", "Earth", "Mars", "Jupiter"]
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    fn active(indices: &[usize], total: usize) -> ActiveFlags {
        let mut flags = ActiveFlags::default();
        for index in 0..total {
            flags.set_item_active(index, indices.contains(&index));
        }
        flags
    }

    fn context<'a>(
        labels: &'a [String],
        flags: &'a ActiveFlags,
        scroll_offset: usize,
    ) -> CarouselStripViewContext<'a> {
        CarouselStripViewContext {
            labels,
            active: flags,
            item_width: 9,
            gutter: 1,
            container_width: 29,
            pane_width: 19,
            overlay_width: 5,
            scroll_offset,
            can_scroll_back: true,
            can_scroll_forward: true,
        }
    }

    #[rstest]
    fn draws_overlays_around_the_clipped_pane(labels: Vec<String>) {
        let flags = active(&[1, 2], labels.len());
        let ctx = context(&labels, &flags, 10);

        let row = CarouselStripComponent::new().view(&ctx);

        assert_eq!(row, "  ◀  [ Venus ] [ Earth ]  ▶  \n");
    }

    #[rstest]
    fn back_overlay_width_comes_from_the_context(labels: Vec<String>) {
        let flags = active(&[1, 2], labels.len());
        let ctx = CarouselStripViewContext {
            overlay_width: 4,
            ..context(&labels, &flags, 10)
        };

        let row = CarouselStripComponent::new().view(&ctx);

        assert_eq!(row, " ◀  [ Venus ] [ Earth ]  ▶   \n");
    }

    #[rstest]
    fn inactive_cards_use_parentheses(labels: Vec<String>) {
        let flags = ActiveFlags::default();
        let ctx = context(&labels, &flags, 0);

        let row = CarouselStripComponent::new().view(&ctx);

        assert!(row.contains("(Mercury) ( Venus )"), "row was {row:?}");
    }

    #[rstest]
    fn disabled_overlays_are_blank(labels: Vec<String>) {
        let flags = active(&[0, 1], labels.len());
        let ctx = CarouselStripViewContext {
            can_scroll_back: false,
            can_scroll_forward: false,
            ..context(&labels, &flags, 0)
        };

        let row = CarouselStripComponent::new().view(&ctx);

        assert!(!row.contains(BACK_GLYPH));
        assert!(!row.contains(FORWARD_GLYPH));
        assert!(row.starts_with("     [Mercury]"), "row was {row:?}");
    }

    #[rstest]
    fn pane_wider_than_container_is_clipped(labels: Vec<String>) {
        let flags = ActiveFlags::default();
        let ctx = CarouselStripViewContext {
            container_width: 12,
            overlay_width: 0,
            ..context(&labels, &flags, 0)
        };

        let row = CarouselStripComponent::new().view(&ctx);

        assert_eq!(row, "(Mercury) ( \n");
    }

    #[test]
    fn empty_strip_shows_placeholder() {
        let flags = ActiveFlags::default();
        let ctx = context(&[], &flags, 0);

        assert_eq!(
            CarouselStripComponent::new().view(&ctx),
            "  No items to scroll.\n"
        );
    }
}
