//! TUI mode for browsing the catalog page.
//!
//! This module provides the entry point for the interactive terminal user
//! interface showing the product, the cart counter, and the review tabs.

use std::io::{self, Write};

use bubbletea_rs::Program;

use sockdrawer::tui::{CatalogApp, set_page_settings};
use sockdrawer::{CatalogError, SockdrawerConfig};

/// Runs the catalog page until the shopper quits.
///
/// # Errors
///
/// Returns [`CatalogError::Tui`] if the terminal program fails to start or
/// exits with an error.
pub async fn run(config: &SockdrawerConfig) -> Result<(), CatalogError> {
    // Store settings in global state for Model::init() to retrieve.
    // If already set, the existing settings remain.
    let _ = set_page_settings(config.page_settings());

    run_tui(config.use_alt_screen())
        .await
        .map_err(|error| CatalogError::Tui {
            message: error.to_string(),
        })
}

/// Runs the bubbletea-rs program with the `CatalogApp` model.
async fn run_tui(alt_screen: bool) -> Result<(), bubbletea_rs::Error> {
    // CatalogApp::init() will retrieve the page settings from module-level
    // storage.
    let program = Program::<CatalogApp>::builder()
        .alt_screen(alt_screen)
        .build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
