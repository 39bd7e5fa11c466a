//! Terminal User Interface for the product catalog page.
//!
//! This module renders the catalog page as an interactive TUI using the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Page state owned by [`app::CatalogApp`]: the cart, the
//!   premium flag, the product widget, both tab widgets, the review form,
//!   and the page event bus
//! - **View**: Components render borrowed view contexts into strings
//! - **Update**: Message-driven state transitions in `update()`
//!
//! Children never mutate state they do not own. The product widget answers
//! cart presses with a [`crate::catalog::CartCommand`], and the review form
//! hands back a [`crate::catalog::Review`] that the root publishes on the
//! [`crate::bus::EventBus`]. The product's subscription turns that event
//! into an [`messages::AppMsg::ReviewReceived`] message.
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Tab and review form state
//! - [`components`]: Rendering components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Page Settings
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, page settings are stored at module level. Call
//! [`set_page_settings`] before starting the program, and
//! `CatalogApp::init()` will retrieve them.

use std::sync::OnceLock;

use crate::catalog::Catalog;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::CatalogApp;

/// Global storage for the settings the page starts with.
static PAGE_SETTINGS: OnceLock<PageSettings> = OnceLock::new();

/// Data the page is mounted with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSettings {
    /// Product shown on the page.
    pub catalog: Catalog,
    /// Whether the shopper is a premium customer.
    pub premium: bool,
}

/// Sets the page settings for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the settings were stored, `false` if they were already set.
pub fn set_page_settings(settings: PageSettings) -> bool {
    PAGE_SETTINGS.set(settings).is_ok()
}

/// Returns a clone of the stored page settings, or the defaults.
pub(crate) fn get_page_settings() -> PageSettings {
    PAGE_SETTINGS.get().cloned().unwrap_or_default()
}
