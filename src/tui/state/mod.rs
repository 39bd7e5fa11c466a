//! State management for the catalog page TUI.
//!
//! This module provides the widget-local state types: tab selection for the
//! two tab widgets and the review form.

mod review_form;
mod tabs;

pub use review_form::{FormField, RequiredField, ReviewFormError, ReviewFormState};
pub use tabs::{InfoTab, ProductTab, Tab, TabState};
