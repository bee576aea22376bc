//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.scroller.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `SCROLLER_ITEMS`, `SCROLLER_ITEM_WIDTH`, …
//! 4. **Command-line arguments** – `--items`/`-i`, `--item-width`/`-w`, …
//!
//! # Configuration File
//!
//! ```toml
//! items = "Mercury, Venus, Earth, Mars, Jupiter, Saturn, Uranus, Neptune"
//! item_width = 18
//! gutter = 2
//! chrome_width = 6
//! resize_debounce_ms = 400
//! preserve_position_on_resize = false
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::ScrollerError;
use crate::viewport::{ElementSelector, ResizePolicy, ScrollerOptions};

const DEFAULT_ITEM_COUNT: u64 = 12;
const DEFAULT_ITEM_WIDTH: u64 = 18;
const DEFAULT_GUTTER: u64 = 2;
const DEFAULT_CHROME_WIDTH: u64 = 6;
const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 400;

/// Narrowest card that still has room for its border and one character.
pub const MIN_ITEM_WIDTH: u64 = 3;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `SCROLLER_ITEMS` or `--items`: Comma-separated item labels
/// - `SCROLLER_ITEM_COUNT` or `--item-count`: Number of generated items
/// - `SCROLLER_ITEM_WIDTH` or `--item-width`: Card width in columns
/// - `SCROLLER_RESIZE_DEBOUNCE_MS` or `--resize-debounce-ms`: Resize debounce
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use scroller::ScrollerConfig;
///
/// let config = ScrollerConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be consistent");
/// let options = config.to_options();
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SCROLLER",
    discovery(
        dotfile_name = ".scroller.toml",
        config_file_name = "scroller.toml",
        app_name = "scroller"
    )
)]
pub struct ScrollerConfig {
    /// Comma-separated labels of the items to scroll through.
    ///
    /// Can be provided via:
    /// - CLI: `--items <LABELS>` or `-i <LABELS>`
    /// - Environment: `SCROLLER_ITEMS`
    /// - Config file: `items = "..."`
    #[ortho_config(cli_short = 'i')]
    pub items: Option<String>,

    /// Number of generated items when `items` is not set.
    ///
    /// Defaults to 12.
    #[ortho_config(cli_short = 'n')]
    pub item_count: u64,

    /// Width of every card, in terminal columns.
    ///
    /// Defaults to 18.
    #[ortho_config(cli_short = 'w')]
    pub item_width: u64,

    /// Columns between neighbouring cards.
    ///
    /// Defaults to 2.
    #[ortho_config()]
    pub gutter: u64,

    /// Columns reserved for the left and right navigation overlays.
    ///
    /// Defaults to 6.
    #[ortho_config()]
    pub chrome_width: u64,

    /// Quiet period after the last terminal resize before relayout.
    ///
    /// Defaults to 400 milliseconds.
    #[ortho_config()]
    pub resize_debounce_ms: u64,

    /// Selector used to locate the item elements.
    ///
    /// Defaults to `scroller__item`.
    #[ortho_config(cli_short = 's')]
    pub element_selector: Option<String>,

    /// Start index reported before the first layout settles.
    #[ortho_config(cli_short = 'p')]
    pub initial_position: Option<u64>,

    /// Keeps the first visible card across resizes instead of re-centring.
    ///
    /// Can be provided via:
    /// - CLI: `--preserve-position-on-resize`
    /// - Config file: `preserve_position_on_resize = true`
    #[ortho_config()]
    pub preserve_position_on_resize: bool,

    /// Writes layout and resize telemetry to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            items: None,
            item_count: DEFAULT_ITEM_COUNT,
            item_width: DEFAULT_ITEM_WIDTH,
            gutter: DEFAULT_GUTTER,
            chrome_width: DEFAULT_CHROME_WIDTH,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            element_selector: None,
            initial_position: None,
            preserve_position_on_resize: false,
            telemetry: false,
        }
    }
}

impl ScrollerConfig {
    /// Checks that the configured values can drive a scroller.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollerError::Configuration`] when cards are narrower than
    /// [`MIN_ITEM_WIDTH`] or the resize debounce is zero.
    pub fn validate(&self) -> Result<(), ScrollerError> {
        if self.item_width < MIN_ITEM_WIDTH {
            return Err(ScrollerError::Configuration {
                message: format!(
                    "item_width must be at least {MIN_ITEM_WIDTH} columns (got {})",
                    self.item_width
                ),
            });
        }

        if self.resize_debounce_ms == 0 {
            return Err(ScrollerError::Configuration {
                message: "resize_debounce_ms must be greater than zero".to_owned(),
            });
        }

        Ok(())
    }

    /// Item labels, either parsed from `items` or generated.
    ///
    /// Blank entries in `items` are ignored.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.items.as_deref().map_or_else(
            || {
                (1..=self.item_count)
                    .map(|number| format!("Card {number}"))
                    .collect()
            },
            |items| {
                items
                    .split(',')
                    .map(str::trim)
                    .filter(|label| !label.is_empty())
                    .map(str::to_owned)
                    .collect()
            },
        )
    }

    /// Relayout policy selected by `preserve_position_on_resize`.
    #[must_use]
    pub const fn resize_policy(&self) -> ResizePolicy {
        if self.preserve_position_on_resize {
            ResizePolicy::PreserveStart
        } else {
            ResizePolicy::Recenter
        }
    }

    /// Builds the options for a scroller instance.
    #[must_use]
    pub fn to_options(&self) -> ScrollerOptions {
        let element_selector = self
            .element_selector
            .as_deref()
            .map_or_else(ElementSelector::default, ElementSelector::new);

        ScrollerOptions {
            element_selector,
            chrome_width: columns(self.chrome_width),
            resize_debounce: Duration::from_millis(self.resize_debounce_ms),
            initial_position: self
                .initial_position
                .and_then(|position| usize::try_from(position).ok()),
            resize_policy: self.resize_policy(),
        }
    }
}

/// Converts a column count to the floating-point geometry the core uses.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "terminal column counts stay far below 2^52"
)]
pub const fn columns(value: u64) -> f64 {
    value as f64
}

#[cfg(test)]
mod tests;
