//! Debounced terminal resize handling for the carousel TUI.
//!
//! Every `WindowSizeMsg` updates the drawn container width at once, but the
//! scroller only relayouts when the newest resize ticket comes back from its
//! timer. Older tickets settle as stale and are dropped.

use std::any::Any;

use bubbletea_rs::Cmd;
use tracing::debug;

use super::CarouselApp;
use crate::tui::messages::AppMsg;
use crate::viewport::{ResizeOutcome, ResizeTicket};

impl CarouselApp {
    /// Records the new terminal size and arms a debounce timer.
    pub(super) fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.strip.set_container_width(f64::from(width));

        let ticket = self.scroller.on_viewport_resize()?;
        Some(Self::resize_timer_cmd(ticket))
    }

    /// Hands an elapsed ticket back to the scroller.
    pub(super) fn handle_resize_settled(&mut self, ticket: ResizeTicket) -> Option<Cmd> {
        match self.scroller.resize_elapsed(ticket, &self.strip) {
            ResizeOutcome::Stale => None,
            ResizeOutcome::Skipped { coalesced } => {
                debug!(coalesced, "resize settled with nothing to lay out");
                crate::tui::record_resize_coalesced(coalesced);
                None
            }
            ResizeOutcome::Relayout { coalesced } => {
                crate::tui::record_resize_coalesced(coalesced);
                self.after_commit(true)
            }
        }
    }

    /// Creates a command that returns `ticket` once its delay has passed.
    pub(crate) fn resize_timer_cmd(ticket: ResizeTicket) -> Cmd {
        Box::pin(async move {
            let elapsed = ticket.elapsed().await;
            Some(Box::new(AppMsg::ResizeSettled(elapsed)) as Box<dyn Any + Send>)
        })
    }
}
