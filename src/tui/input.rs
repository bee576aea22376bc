//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::ScrollBack),
        KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::ScrollForward),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::First),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::Last),
        _ => None,
    }
}
