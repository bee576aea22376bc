//! Interactive carousel mode.
//!
//! This module provides the entry point for the terminal carousel that lets
//! users step a window of cards left and right.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use scroller::telemetry::StderrJsonlTelemetrySink;
use scroller::tui::{
    CarouselApp, CarouselSettings, set_initial_terminal_size, set_startup_settings,
    set_telemetry_sink,
};
use scroller::{ScrollerConfig, ScrollerError};

/// Runs the carousel for the given configuration.
///
/// # Errors
///
/// Returns [`ScrollerError::Terminal`] if the TUI fails to initialise or
/// exits abnormally.
pub async fn run(config: &ScrollerConfig) -> Result<(), ScrollerError> {
    // Store settings in global state for Model::init() to retrieve. If they
    // were already set, the existing settings remain.
    let _ = set_startup_settings(CarouselSettings::from_config(config));

    if config.telemetry {
        let _ = set_telemetry_sink(Arc::new(StderrJsonlTelemetrySink));
    }

    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await?;
    Ok(())
}

/// Runs the bubbletea-rs program with the `CarouselApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<CarouselApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
