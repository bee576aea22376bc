//! Column-aware text helpers for fixed-width terminal rows.
//!
//! Widths are measured in terminal columns, not Unicode scalar count, so wide
//! characters occupy two cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

enum WidthTruncationDecision {
    Empty,
    Unchanged,
    DotFallback,
    Ellipsis,
}

fn width_truncation_decision(text: &str, max_width: usize) -> WidthTruncationDecision {
    if max_width == 0 {
        WidthTruncationDecision::Empty
    } else if text.width() <= max_width {
        WidthTruncationDecision::Unchanged
    } else if max_width <= 3 {
        WidthTruncationDecision::DotFallback
    } else {
        WidthTruncationDecision::Ellipsis
    }
}

/// Truncates text to the provided display width and appends an ellipsis.
pub(crate) fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    match width_truncation_decision(text, max_width) {
        WidthTruncationDecision::Empty => String::new(),
        WidthTruncationDecision::Unchanged => text.to_owned(),
        WidthTruncationDecision::DotFallback => ".".repeat(max_width),
        WidthTruncationDecision::Ellipsis => {
            let target_width = max_width.saturating_sub(3);
            let mut truncated = String::new();
            let mut current_width = 0_usize;
            for ch in text.chars() {
                let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width.saturating_add(char_width) > target_width {
                    break;
                }
                truncated.push(ch);
                current_width = current_width.saturating_add(char_width);
            }
            format!("{truncated}...")
        }
    }
}

/// Centres `text` in a field of `width` columns, truncating when it is too
/// wide.
///
/// Odd padding puts the extra space on the right.
pub(crate) fn centre_in_width(text: &str, width: usize) -> String {
    let fitted = truncate_to_display_width_with_ellipsis(text, width);
    let slack = width.saturating_sub(fitted.width());
    #[expect(
        clippy::integer_division,
        reason = "padding is whole columns; the odd column goes right"
    )]
    let left = slack / 2;
    let right = slack.saturating_sub(left);
    format!("{}{fitted}{}", " ".repeat(left), " ".repeat(right))
}

/// Returns the `width` columns of `text` starting at column `skip`.
///
/// The result is always exactly `width` columns wide: wide characters cut by
/// either edge become spaces and short input is padded on the right.
pub(crate) fn slice_columns(text: &str, skip: usize, width: usize) -> String {
    let end = skip.saturating_add(width);
    let mut output = String::new();
    let mut column = 0_usize;

    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        let next = column.saturating_add(char_width);
        if column >= end {
            break;
        }
        if column >= skip && next <= end {
            output.push(ch);
        } else if next > skip {
            let visible = next.min(end).saturating_sub(column.max(skip));
            output.push_str(&" ".repeat(visible));
        }
        column = next;
    }

    let written = output.width();
    output.push_str(&" ".repeat(width.saturating_sub(written)));
    output
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(
            truncate_to_display_width_with_ellipsis("hello", 10),
            "hello"
        );
    }

    #[test]
    fn truncate_handles_small_widths() {
        assert_eq!(truncate_to_display_width_with_ellipsis("abcdef", 0), "");
        assert_eq!(truncate_to_display_width_with_ellipsis("abcdef", 2), "..");
        assert_eq!(truncate_to_display_width_with_ellipsis("abcdef", 3), "...");
    }

    #[test]
    fn truncate_respects_wide_characters() {
        assert_eq!(
            truncate_to_display_width_with_ellipsis("你好世界", 5),
            "你..."
        );
    }

    #[rstest]
    #[case::even_slack("ab", 6, "  ab  ")]
    #[case::odd_slack("ab", 5, " ab  ")]
    #[case::exact("abcd", 4, "abcd")]
    #[case::too_wide("Jupiter", 6, "Jup...")]
    fn centre_pads_and_truncates(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(centre_in_width(text, width), expected);
    }

    #[rstest]
    #[case::prefix("abcdefgh", 0, 3, "abc")]
    #[case::middle("abcdefgh", 2, 3, "cde")]
    #[case::past_end("abc", 2, 4, "c   ")]
    #[case::beyond_text("abc", 10, 2, "  ")]
    fn slice_takes_a_column_window(
        #[case] text: &str,
        #[case] skip: usize,
        #[case] width: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(slice_columns(text, skip, width), expected);
    }

    #[rstest]
    #[case::cut_on_left("你好", 1, 3, " 好")]
    #[case::cut_on_right("你好", 0, 3, "你 ")]
    fn slice_blanks_split_wide_characters(
        #[case] text: &str,
        #[case] skip: usize,
        #[case] width: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(slice_columns(text, skip, width), expected);
    }
}
