//! Lifecycle and window handlers for the catalog TUI.
//!
//! This module handles startup initialisation, terminal resize events, and
//! high-level lifecycle messages such as quit and help toggling.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::CatalogApp;
use crate::tui::messages::AppMsg;

impl CatalogApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => {
                self.handle_initialized();
                None
            }
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    /// Handles the synthetic startup message.
    ///
    /// `Initialized` is a one-shot event emitted during startup; repeats are
    /// ignored.
    fn handle_initialized(&mut self) {
        if self.has_initialized {
            return;
        }
        self.has_initialized = true;
        tracing::debug!(
            premium = self.premium,
            variants = self.product.variants().len(),
            "catalog page mounted"
        );
    }

    /// Command delivering `AppMsg::Initialized` as soon as the program starts.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
