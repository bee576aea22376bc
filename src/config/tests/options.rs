//! Tests for label generation and the mapping to scroller options.

use std::time::Duration;

use rstest::rstest;

use crate::ScrollerConfig;
use crate::viewport::{ElementSelector, ResizePolicy};

#[rstest]
fn labels_are_generated_when_items_are_unset() {
    let config = ScrollerConfig {
        item_count: 3,
        ..ScrollerConfig::default()
    };

    assert_eq!(config.labels(), vec!["Card 1", "Card 2", "Card 3"]);
}

#[rstest]
#[case::trims_whitespace(" Mercury , Venus ,Earth", vec!["Mercury", "Venus", "Earth"])]
#[case::skips_blank_entries("a,,b, ,", vec!["a", "b"])]
#[case::blank_list_is_empty("", vec![])]
fn labels_are_parsed_from_items(#[case] items: &str, #[case] expected: Vec<&str>) {
    let config = ScrollerConfig {
        items: Some(items.to_owned()),
        ..ScrollerConfig::default()
    };

    assert_eq!(config.labels(), expected);
}

#[rstest]
fn default_options_match_scroller_defaults() {
    let options = ScrollerConfig::default().to_options();

    assert_eq!(options.element_selector, ElementSelector::default());
    assert_eq!(options.chrome_width, 6.0);
    assert_eq!(options.resize_debounce, Duration::from_millis(400));
    assert_eq!(options.initial_position, None);
    assert_eq!(options.resize_policy, ResizePolicy::Recenter);
}

#[rstest]
fn configured_values_flow_into_options() {
    let config = ScrollerConfig {
        element_selector: Some("slide".to_owned()),
        chrome_width: 10,
        resize_debounce_ms: 120,
        initial_position: Some(4),
        preserve_position_on_resize: true,
        ..ScrollerConfig::default()
    };

    let options = config.to_options();

    assert_eq!(options.element_selector.as_str(), "slide");
    assert_eq!(options.chrome_width, 10.0);
    assert_eq!(options.resize_debounce, Duration::from_millis(120));
    assert_eq!(options.initial_position, Some(4));
    assert_eq!(options.resize_policy, ResizePolicy::PreserveStart);
}
