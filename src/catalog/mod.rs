//! Catalog data and the product widget state.
//!
//! The catalog is a static record describing one product and its variants.
//! [`ProductState`] wraps it with the selected variant and the reviews the
//! page has received, exposing the computed strings the product view shows.

pub mod error;
pub mod models;
mod product;

pub use error::CatalogError;
pub use models::{Catalog, Rating, Review, Variant, VariantId};
pub use product::{CartCommand, ProductState, STANDARD_SHIPPING};
