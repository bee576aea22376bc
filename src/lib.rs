//! Scroller library crate providing a horizontally scrolling viewport window.
//!
//! The [`viewport`] module holds the widget core: it decides how many
//! equal-width items fit in the available width, keeps that window centred
//! over the list, steps it one item at a time, and relayouts once resize
//! signals have settled. It is independent of any rendering surface; hosts
//! supply measurements through [`viewport::MeasurementProvider`] and receive
//! active flags through [`viewport::ActiveSink`].
//!
//! The [`tui`] module is one such host, drawing the window as a row of cards
//! in the terminal.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tui;
pub mod viewport;

pub use config::ScrollerConfig;
pub use error::ScrollerError;
pub use viewport::{
    Direction, MeasurementProvider, ResizeOutcome, ResizePolicy, Scroller, ScrollerOptions,
    StripMeasurements, Window,
};
