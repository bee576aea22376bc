//! Startup context storage for the terminal host.
//!
//! This module owns the global `OnceLock` values used during TUI bootstrapping
//! and provides the setter/getter functions consumed by `main` and the app
//! handlers.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::config::ScrollerConfig;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};
use crate::viewport::{ScrollerOptions, Window};

/// Global storage for the carousel settings.
///
/// This is set before the TUI program starts and read by `CarouselApp::init()`.
static STARTUP_SETTINGS: OnceLock<CarouselSettings> = OnceLock::new();

/// Global storage for initial terminal dimensions.
///
/// This is set before the TUI program starts so the first layout uses the
/// actual terminal width.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Everything the carousel needs to build its first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSettings {
    /// Labels of the cards, in order.
    pub labels: Vec<String>,
    /// Width of every card in columns.
    pub item_width: u16,
    /// Columns between neighbouring cards.
    pub gutter: u16,
    /// Options for the scroller instance.
    pub options: ScrollerOptions,
}

impl CarouselSettings {
    /// Builds settings from a loaded configuration.
    ///
    /// Widths beyond `u16::MAX` columns are clamped.
    #[must_use]
    pub fn from_config(config: &ScrollerConfig) -> Self {
        Self {
            labels: config.labels(),
            item_width: u16::try_from(config.item_width).unwrap_or(u16::MAX),
            gutter: u16::try_from(config.gutter).unwrap_or(u16::MAX),
            options: config.to_options(),
        }
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self::from_config(&ScrollerConfig::default())
    }
}

/// Sets the carousel settings for the TUI application.
///
/// # Returns
///
/// `true` if the settings were set, `false` if they were already set.
pub fn set_startup_settings(settings: CarouselSettings) -> bool {
    STARTUP_SETTINGS.set(settings).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// # Arguments
///
/// * `width` - Terminal width in columns.
/// * `height` - Terminal height in rows.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets a clone of the startup settings, or the defaults if none were set.
pub(crate) fn get_startup_settings() -> CarouselSettings {
    STARTUP_SETTINGS.get().cloned().unwrap_or_default()
}

/// Gets the initial terminal dimensions from storage.
///
/// Falls back to querying the terminal, then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}

fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Records that a layout finished its effect phase.
pub(crate) fn record_layout_settled(window: &Window) {
    get_telemetry_sink().record(TelemetryEvent::LayoutSettled {
        total_items: window.total_items(),
        active_count: window.active_count(),
        start_at: window.start_at(),
    });
}

/// Records how many resize signals one settlement absorbed.
pub(crate) fn record_resize_coalesced(signals: u64) {
    get_telemetry_sink().record(TelemetryEvent::ResizeCoalesced { signals });
}
