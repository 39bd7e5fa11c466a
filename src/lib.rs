//! Sockdrawer library crate: a product catalog page for the terminal.
//!
//! The page shows one product with selectable colour variants, a cart
//! counter, a Shipping/Details tab widget, and a review form whose
//! submissions reach the product through a page-scoped event bus.
//!
//! State lives in the [`tui::CatalogApp`] root. Child widgets receive
//! borrowed view contexts and answer with command values such as
//! [`catalog::CartCommand`] that the root applies.

pub mod bus;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod tui;

pub use bus::{BusEvent, EventBus, SubscriptionId, Topic};
pub use cart::Cart;
pub use catalog::{
    CartCommand, Catalog, CatalogError, ProductState, Rating, Review, Variant, VariantId,
};
pub use config::SockdrawerConfig;
