//! `Model` trait implementation for the carousel TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `CarouselApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::CarouselApp;
use super::rendering::HINTS;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for CarouselApp {
    fn init() -> (Self, Option<Cmd>) {
        let settings = crate::tui::get_startup_settings();
        let (width, height) = crate::tui::get_initial_terminal_size();
        let model = Self::new(settings, width, height);

        // The first layout runs when `AppMsg::Initialized` is handled.
        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            let mapped = map_key_to_message(key_msg)?;
            return self.handle_message(&mapped);
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push('\n');
        output.push_str(&self.render_strip());
        output.push('\n');
        output.push_str(&self.render_status_bar());
        output.push_str(HINTS);

        self.normalise_viewport(&output)
    }
}

impl CarouselApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces to clear stale cells after a resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            output.push(ch);
            continue;
        }

        if visible_width.saturating_add(char_width) > width {
            break;
        }

        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));
    output
}
