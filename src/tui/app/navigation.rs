//! Navigation handlers for the carousel TUI.

use bubbletea_rs::Cmd;

use super::CarouselApp;
use crate::tui::messages::AppMsg;
use crate::viewport::{Direction, Window};

impl CarouselApp {
    /// Dispatches navigation messages to the scroller.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let moved = match msg {
            AppMsg::ScrollBack => self.scroller.scroll_by(Direction::Backward, &self.strip),
            AppMsg::ScrollForward => self.scroller.scroll_by(Direction::Forward, &self.strip),
            AppMsg::First => self.scroller.scroll_to(0, &self.strip),
            AppMsg::Last => {
                let last = self.scroller.window().map(Window::last_start)?;
                self.scroller.scroll_to(last, &self.strip)
            }
            _ => false,
        };
        self.after_commit(moved)
    }
}
