//! Error types exposed by the catalog page.

use thiserror::Error;

/// Errors surfaced by catalog operations and application start-up.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A variant index outside the variants sequence was selected.
    #[error("variant {index} does not exist (the product has {count} variants)")]
    VariantOutOfRange {
        /// Requested zero-based index.
        index: usize,
        /// Number of variants available.
        count: usize,
    },

    /// A rating outside `1..=5` was supplied.
    #[error("rating must be between 1 and 5, got {value}")]
    InvalidRating {
        /// The rejected value.
        value: u8,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The terminal UI failed to start or crashed.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail reported by the TUI runtime.
        message: String,
    },
}
