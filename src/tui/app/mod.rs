//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the carousel's application state and update logic.
//! It owns one [`Scroller`] together with the [`StripMeasurements`] that
//! describe what was last drawn, and turns the scroller's commit and effect
//! phases into bubbletea-rs commands.
//!
//! # Module Structure
//!
//! - `model_impl`: `Model` trait implementation and viewport normalisation
//! - `navigation`: Key-driven window movement
//! - `rendering`: View rendering methods for terminal output
//! - `resize_handlers`: Debounced terminal resize handling

use std::any::Any;

use bubbletea_rs::Cmd;

use super::components::CarouselStripComponent;
use super::messages::AppMsg;
use super::storage::CarouselSettings;
use crate::viewport::{ActiveFlags, Scroller, StripMeasurements};

mod model_impl;
mod navigation;
mod rendering;
mod resize_handlers;

/// Main application model for the carousel TUI.
#[derive(Debug)]
pub struct CarouselApp {
    /// Scroller driving the visible window.
    scroller: Scroller,
    /// Measurements of the strip as last drawn.
    strip: StripMeasurements,
    /// Card labels, in order.
    labels: Vec<String>,
    /// Active flags reported by the scroller's effect phase.
    active: ActiveFlags,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Strip renderer.
    strip_view: CarouselStripComponent,
}

impl CarouselApp {
    /// Creates an application for a terminal of `width` by `height`.
    ///
    /// No layout happens until [`AppMsg::Initialized`] is handled.
    #[must_use]
    pub fn new(settings: CarouselSettings, width: u16, height: u16) -> Self {
        let CarouselSettings {
            labels,
            item_width,
            gutter,
            options,
        } = settings;

        let mut strip = StripMeasurements::new(f64::from(width), f64::from(gutter));
        for _ in &labels {
            strip.push_element(options.element_selector.as_str(), f64::from(item_width));
        }

        Self {
            scroller: Scroller::create(options),
            strip,
            labels,
            active: ActiveFlags::default(),
            width,
            height,
            strip_view: CarouselStripComponent::new(),
        }
    }

    /// Returns the scroller driving the window.
    #[must_use]
    pub const fn scroller(&self) -> &Scroller {
        &self.scroller
    }

    /// Returns the active flags as of the last effect phase.
    #[must_use]
    pub const fn active_flags(&self) -> &ActiveFlags {
        &self.active
    }

    /// Returns the card labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Messages that commit new scroller state return a command that
    /// delivers [`AppMsg::EffectsDue`] once the new frame has been drawn.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            // Application lifecycle
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Quit => {
                self.scroller.dispose();
                Some(bubbletea_rs::quit())
            }

            // Navigation
            AppMsg::ScrollBack
            | AppMsg::ScrollForward
            | AppMsg::First
            | AppMsg::Last => self.handle_navigation_msg(msg),

            // Scroller phases
            AppMsg::EffectsDue => {
                self.handle_effects_due();
                None
            }

            // Window events
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            AppMsg::ResizeSettled(ticket) => self.handle_resize_settled(*ticket),
        }
    }

    fn handle_initialized(&mut self) -> Option<Cmd> {
        let committed = self.scroller.recalculate(&self.strip);
        self.after_commit(committed)
    }

    /// Draws committed state into the strip and schedules the effect phase.
    fn after_commit(&mut self, committed: bool) -> Option<Cmd> {
        if !committed {
            return None;
        }
        self.record_render();
        self.scroller
            .has_pending_effects()
            .then(Self::effects_due_cmd)
    }

    /// Runs pending effects against the drawn strip.
    fn handle_effects_due(&mut self) {
        let report = self.scroller.run_effects(&self.strip, &mut self.active);
        self.record_render();

        if report.aligned
            && let Some(window) = self.scroller.window()
        {
            crate::tui::record_layout_settled(window);
        }
    }

    /// Records the pane width and scroll offset the next frame will show.
    fn record_render(&mut self) {
        self.strip
            .render(self.scroller.pane_width(), self.scroller.scroll_state());
    }

    /// Creates a command that emits `EffectsDue` immediately.
    ///
    /// The runtime draws the committed frame before delivering the message.
    pub(crate) fn effects_due_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::EffectsDue) as Box<dyn Any + Send>) })
    }

    /// Creates a command that emits `Initialized` immediately.
    pub(crate) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
