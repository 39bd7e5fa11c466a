//! CLI operation mode handlers.
//!
//! - [`catalog_tui`]: Interactive TUI for browsing the catalog page

pub mod catalog_tui;
