//! `Model` trait implementation for the catalog TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `CatalogApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use super::CatalogApp;
use crate::tui::components::fit_line;
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;
use crate::tui::state::ProductTab;

impl Model for CatalogApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve the page settings from module-level storage
        let settings = crate::tui::get_page_settings();
        let model = Self::new(settings.catalog, settings.premium);

        // Emit an immediate startup message to trigger the first render cycle.
        let cmd = Self::immediate_init_cmd();

        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs with context-aware mapping
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let context = self.input_context();
            if let Some(mapped) = map_key_to_message_with_context(key_msg, context) {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
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
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push('\n');
        output.push_str(&self.render_body());
        output.push('\n');
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl CatalogApp {
    /// Returns the current input context for context-aware key mapping.
    pub(crate) const fn input_context(&self) -> InputContext {
        match self.product_tabs.selected() {
            ProductTab::Reviews => InputContext::Browsing,
            ProductTab::MakeAReview => InputContext::ReviewForm(self.review_form.focus()),
        }
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces to clear stale cells after a resize.
    /// The final rendered line is pinned to the bottom row so the status bar
    /// stays visible whatever the page height.
    fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = usize::from(self.width.max(1)).saturating_sub(1).max(1);
        let body_height = usize::from(self.height.max(1)).saturating_sub(1);

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| fit_line(line, safe_width))
            .collect();
        let status = lines.pop().unwrap_or_else(|| " ".repeat(safe_width));
        lines.truncate(body_height);

        let missing = body_height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));
        lines.push(status);

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}
