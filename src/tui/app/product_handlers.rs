//! Product widget handlers for the catalog TUI.
//!
//! This module handles variant selection and the add/remove cart buttons.
//! The product widget only describes the cart change it wants; the root
//! applies the returned command to the cart it owns.

use bubbletea_rs::Cmd;

use super::CatalogApp;
use crate::catalog::CartCommand;
use crate::tui::messages::AppMsg;

impl CatalogApp {
    /// Dispatches product widget messages to their handlers.
    pub(super) fn handle_product_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SelectVariant(index) => self.handle_select_variant(*index),
            AppMsg::NextVariant => {
                self.product.next_variant();
                self.error = None;
                None
            }
            AppMsg::PreviousVariant => {
                self.product.previous_variant();
                self.error = None;
                None
            }
            AppMsg::AddToCart => self.handle_cart_button(self.product.add_to_cart()),
            AppMsg::RemoveFromCart => self.handle_cart_button(self.product.remove_from_cart()),
            AppMsg::ReviewReceived(_) => {
                self.apply_delivery(msg);
                None
            }
            _ => {
                // Unreachable: caller filters to product messages.
                None
            }
        }
    }

    /// Applies a message returned by a bus subscriber.
    ///
    /// Deliveries only update state; they never produce commands.
    pub(super) fn apply_delivery(&mut self, msg: &AppMsg) {
        match msg {
            AppMsg::ReviewReceived(review) => self.product.append_review(review.clone()),
            other => tracing::debug!(?other, "ignoring unexpected bus delivery"),
        }
    }

    fn handle_select_variant(&mut self, index: usize) -> Option<Cmd> {
        match self.product.select_variant(index) {
            Ok(()) => self.error = None,
            Err(error) => self.error = Some(error.to_string()),
        }
        None
    }

    /// Applies a cart command issued by the product widget.
    ///
    /// The buttons are disabled while the selected variant is out of stock,
    /// so presses are dropped in that state.
    fn handle_cart_button(&mut self, command: Option<CartCommand>) -> Option<Cmd> {
        if !self.product.in_stock() {
            tracing::debug!("ignoring cart button while variant is out of stock");
            return None;
        }
        if let Some(cmd) = command {
            self.cart.apply(cmd);
            self.error = None;
        }
        None
    }
}
