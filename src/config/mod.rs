//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – A standard (non-premium) shopper on the alternate screen
//! 2. **Configuration file** – `.sockdrawer.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `SOCKDRAWER_*`
//! 4. **Command-line arguments** – `--premium`/`-p` and `--no-alt-screen`
//!
//! # Configuration File
//!
//! ```toml
//! premium = true
//! no_alt_screen = false
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogError};
use crate::tui::PageSettings;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use sockdrawer::SockdrawerConfig;
///
/// let config = SockdrawerConfig::load().expect("failed to load configuration");
/// let settings = config.page_settings();
/// assert_eq!(settings.premium, config.premium);
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SOCKDRAWER",
    discovery(
        dotfile_name = ".sockdrawer.toml",
        config_file_name = "sockdrawer.toml",
        app_name = "sockdrawer"
    )
)]
pub struct SockdrawerConfig {
    /// Treats the shopper as a premium customer with free shipping.
    ///
    /// Can be provided via:
    /// - CLI: `--premium` / `-p`
    /// - Config file: `premium = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so `SOCKDRAWER_PREMIUM` is not read.
    #[ortho_config(cli_short = 'p')]
    pub premium: bool,

    /// Renders the page inline instead of on the alternate screen.
    ///
    /// Can be provided via:
    /// - CLI: `--no-alt-screen`
    /// - Config file: `no_alt_screen = true`
    #[ortho_config()]
    pub no_alt_screen: bool,
}

impl SockdrawerConfig {
    /// Loads configuration, mapping failures to [`CatalogError`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] when ortho-config fails to
    /// parse arguments or load configuration files.
    pub fn load_page_config() -> Result<Self, CatalogError> {
        Self::load().map_err(|error| CatalogError::Configuration {
            message: error.to_string(),
        })
    }

    /// Whether the program should take over the alternate screen.
    #[must_use]
    pub const fn use_alt_screen(&self) -> bool {
        !self.no_alt_screen
    }

    /// Builds the settings the catalog page is mounted with.
    #[must_use]
    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            catalog: Catalog::socks(),
            premium: self.premium,
        }
    }
}
