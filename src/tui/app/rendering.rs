//! Rendering logic for the carousel TUI application.
//!
//! These are pure query methods that read state without modification.

use super::CarouselApp;
use crate::tui::components::CarouselStripViewContext;
use crate::viewport::{ScrollState, Window};

/// Key hints shown below the status line.
pub(super) const HINTS: &str = "←/h back  →/l forward  g first  G last  q quit\n";

impl CarouselApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Scroller";
        let pending = if self.scroller.has_pending_effects() {
            " [settling]"
        } else {
            ""
        };
        format!("{title}{pending}\n")
    }

    /// Renders the strip of cards, or a placeholder before the first layout.
    pub(super) fn render_strip(&self) -> String {
        let Some(window) = self.scroller.window() else {
            let placeholder = if self.labels.is_empty() {
                "  No items to scroll.\n"
            } else {
                "  Measuring…\n"
            };
            return placeholder.to_owned();
        };

        let ctx = CarouselStripViewContext {
            labels: &self.labels,
            active: &self.active,
            item_width: to_columns(window.item_width()),
            gutter: to_columns(window.gutter_width()),
            container_width: usize::from(self.width),
            pane_width: to_columns(window.pane_width()),
            overlay_width: to_columns(
                window
                    .nav_overlay_width(f64::from(self.width))
                    .floor(),
            ),
            scroll_offset: scroll_offset_columns(self.scroller.scroll_state()),
            can_scroll_back: window
                .start_at()
                .checked_sub(1)
                .is_some_and(|target| self.scroller.can_scroll_to(target)),
            can_scroll_forward: self.scroller.can_scroll_to(window.start_at().saturating_add(1)),
        };
        self.strip_view.view(&ctx)
    }

    /// Renders the status line naming the visible range.
    pub(super) fn render_status_bar(&self) -> String {
        if self.labels.is_empty() {
            return "No items\n".to_owned();
        }
        self.scroller
            .window()
            .map_or_else(|| format!("{} items\n", self.labels.len()), status_line)
    }
}

fn status_line(window: &Window) -> String {
    format!(
        "Items {}–{} of {}\n",
        window.start_at().saturating_add(1),
        window.end(),
        window.total_items()
    )
}

/// Columns of the strip scrolled out to the left of the pane.
#[expect(
    clippy::float_arithmetic,
    reason = "the scroll offset is a negative translation in columns"
)]
fn scroll_offset_columns(scroll: &ScrollState) -> usize {
    to_columns(-scroll.scroll_left)
}

/// Rounds a non-negative geometry value to whole terminal columns.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "values are clamped to zero and rounded before the cast"
)]
fn to_columns(value: f64) -> usize {
    value.round().max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::viewport::{LayoutInput, compute_layout};

    #[rstest]
    #[case::whole(58.0, 58)]
    #[case::rounds_half_up(12.5, 13)]
    #[case::negative(-3.0, 0)]
    #[case::not_a_number(f64::NAN, 0)]
    fn columns_are_rounded_and_clamped(#[case] value: f64, #[case] expected: usize) {
        assert_eq!(to_columns(value), expected);
    }

    #[rstest]
    #[case::even_leftover(29, 19, 5)]
    #[case::odd_leftover_goes_right(30, 19, 5)]
    #[case::pane_wider_than_container(12, 19, 0)]
    fn overlay_columns_floor_the_window_split(
        #[case] container: u16,
        #[case] pane: usize,
        #[case] expected: usize,
    ) {
        let window = compute_layout(&LayoutInput {
            total_items: 5,
            item_width: 9.0,
            gutter_width: 1.0,
            viewport_width: 29.0,
            chrome_width: 10.0,
        })
        .expect("five items lay out");
        assert_eq!(to_columns(window.pane_width()), pane);

        let overlay = to_columns(window.nav_overlay_width(f64::from(container)).floor());

        assert_eq!(overlay, expected);
    }

    #[test]
    fn scroll_offset_is_the_negated_translation() {
        let scroll = ScrollState {
            scroll_left: -80.0,
            initializing: false,
        };

        assert_eq!(scroll_offset_columns(&scroll), 80);
    }
}
