//! Terminal host for the scroller.
//!
//! This module renders a row of cards in the terminal and drives a
//! [`Scroller`](crate::viewport::Scroller) from key presses and terminal
//! resizes using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::CarouselApp`]
//! - **View**: Rendering logic in [`components::CarouselStripComponent`]
//! - **Update**: Message-driven state transitions in `update()`
//!
//! The scroller's commit and effect phases map onto the update loop: a
//! message commits new state and returns a command that delivers
//! [`messages::AppMsg::EffectsDue`], so the effects run only after the
//! committed state has been drawn.
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, startup settings are kept in module-level storage. Call
//! [`set_startup_settings`] before starting the program, and
//! `CarouselApp::init()` will retrieve them.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
mod storage;

pub use app::CarouselApp;
pub use storage::{
    CarouselSettings, set_initial_terminal_size, set_startup_settings, set_telemetry_sink,
};
pub(crate) use storage::{
    get_initial_terminal_size, get_startup_settings, record_layout_settled,
    record_resize_coalesced,
};
