//! Message types for the TUI update loop.
//!
//! Messages represent user actions, timer results, and system events.

use crate::viewport::ResizeTicket;

/// Messages for the carousel TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Application lifecycle
    /// Synthetic startup event that triggers the first layout.
    Initialized,
    /// Quit the application.
    Quit,

    // Navigation
    /// Move the window one card towards the start.
    ScrollBack,
    /// Move the window one card towards the end.
    ScrollForward,
    /// Move the window to the first card.
    First,
    /// Move the window as far towards the end as it fits.
    Last,

    // Scroller phases
    /// Committed state has been drawn; run pending effects.
    EffectsDue,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// A resize debounce delay has passed.
    ResizeSettled(ResizeTicket),
}
