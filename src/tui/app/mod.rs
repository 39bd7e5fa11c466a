//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the root of the catalog page. It owns the cart, the
//! premium flag, the page event bus, and every child widget's state, and
//! routes each message to the handler for its category.
//!
//! # Module Structure
//!
//! - `product_handlers`: Variant selection and cart commands
//! - `review_handlers`: Review form editing, submission, and bus delivery
//! - `lifecycle_handlers`: Startup, resize, help, and quit
//! - `rendering`: Header, status bar, and help overlay
//! - `model_impl`: The `bubbletea_rs::Model` implementation

use bubbletea_rs::Cmd;

use crate::bus::{BusEvent, EventBus, Topic};
use crate::cart::Cart;
use crate::catalog::{Catalog, ProductState};

use super::components::{ProductTabsComponent, ProductViewComponent};
use super::messages::AppMsg;
use super::state::{InfoTab, ProductTab, ReviewFormState, TabState};

mod lifecycle_handlers;
mod model_impl;
mod product_handlers;
mod rendering;
mod review_handlers;

/// Default terminal width used before the first resize event.
const DEFAULT_WIDTH: u16 = 80;
/// Default terminal height used before the first resize event.
const DEFAULT_HEIGHT: u16 = 24;

/// Main application model for the catalog page TUI.
#[derive(Debug)]
pub struct CatalogApp {
    /// Whether the shopper is a premium customer.
    pub(crate) premium: bool,
    /// Variant ids added to the cart, in order.
    pub(crate) cart: Cart,
    /// Product widget state.
    pub(crate) product: ProductState,
    /// Shipping/Details tab selection.
    pub(crate) info_tabs: TabState<InfoTab>,
    /// Reviews/Make-a-Review tab selection.
    pub(crate) product_tabs: TabState<ProductTab>,
    /// Review form state.
    pub(crate) review_form: ReviewFormState,
    /// Page-scoped event bus.
    bus: EventBus<AppMsg>,
    /// Message from the last rejected action, if any.
    pub(crate) error: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Product widget renderer.
    product_view: ProductViewComponent,
    /// Reviews/Make-a-Review renderer.
    product_tabs_view: ProductTabsComponent,
    /// Whether the startup message has been handled.
    has_initialized: bool,
}

impl Default for CatalogApp {
    fn default() -> Self {
        Self::new(Catalog::socks(), false)
    }
}

impl CatalogApp {
    /// Creates the page for `catalog` and mounts the product widget.
    ///
    /// Mounting subscribes the product to the review-submitted topic of the
    /// page bus for the lifetime of the application.
    #[must_use]
    pub fn new(catalog: Catalog, premium: bool) -> Self {
        let mut bus = EventBus::new();
        bus.subscribe(Topic::ReviewSubmitted, |event| match event {
            BusEvent::ReviewSubmitted(review) => Some(AppMsg::ReviewReceived(review.clone())),
        });

        Self {
            premium,
            cart: Cart::new(),
            product: ProductState::new(catalog),
            info_tabs: TabState::default(),
            product_tabs: TabState::default(),
            review_form: ReviewFormState::new(),
            bus,
            error: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show_help: false,
            product_view: ProductViewComponent::new(),
            product_tabs_view: ProductTabsComponent::new(),
            has_initialized: false,
        }
    }

    /// Returns the application resized to an explicit terminal size.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Whether the shopper is a premium customer.
    #[must_use]
    pub const fn premium(&self) -> bool {
        self.premium
    }

    /// The cart owned by the page.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The product widget state.
    #[must_use]
    pub const fn product(&self) -> &ProductState {
        &self.product
    }

    /// The review form state.
    #[must_use]
    pub const fn review_form(&self) -> &ReviewFormState {
        &self.review_form
    }

    /// Active info tab.
    #[must_use]
    pub const fn info_tab(&self) -> InfoTab {
        self.info_tabs.selected()
    }

    /// Active product tab.
    #[must_use]
    pub const fn product_tab(&self) -> ProductTab {
        self.product_tabs.selected()
    }

    /// The page event bus.
    #[must_use]
    pub const fn bus(&self) -> &EventBus<AppMsg> {
        &self.bus
    }

    /// Message from the last rejected action, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to specialised
    /// handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_product() {
            return self.handle_product_msg(msg);
        }
        if msg.is_tab() {
            return self.handle_tab_msg(msg);
        }
        if msg.is_form() {
            return self.handle_form_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches tab selection messages.
    fn handle_tab_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SelectInfoTab(tab) => self.info_tabs.select(*tab),
            AppMsg::CycleInfoTab => self.info_tabs.cycle(),
            AppMsg::SelectProductTab(tab) => self.product_tabs.select(*tab),
            AppMsg::CycleProductTab => self.product_tabs.cycle(),
            _ => {
                // Unreachable: caller filters to tab messages.
            }
        }
        None
    }
}
