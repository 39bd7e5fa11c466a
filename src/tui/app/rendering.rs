//! Rendering logic for the catalog TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::CatalogApp;
use crate::tui::components::{ProductTabsViewContext, ProductViewContext};
use crate::tui::state::{FormField, ProductTab};

impl CatalogApp {
    /// Renders the header bar with the cart counter.
    pub(super) fn render_header(&self) -> String {
        let title = "Sockdrawer - Product Catalog";
        let premium = if self.premium { " [Premium]" } else { "" };
        format!("{title} | Cart ({}){premium}\n", self.cart.len())
    }

    /// Renders the product widget followed by the review tabs.
    pub(super) fn render_body(&self) -> String {
        let mut output = self.product_view.view(&ProductViewContext {
            product: &self.product,
            premium: self.premium,
            info_tabs: &self.info_tabs,
        });
        output.push('\n');
        output.push_str(&self.product_tabs_view.view(&ProductTabsViewContext {
            tabs: &self.product_tabs,
            reviews: self.product.reviews(),
            form: &self.review_form,
            max_width: usize::from(self.width).saturating_sub(4).max(1),
        }));
        output
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }

        let hints = match self.product_tabs.selected() {
            ProductTab::Reviews => self.browsing_status_hints(),
            ProductTab::MakeAReview => form_status_hints(self.review_form.focus()),
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Product:
  h, Left    Previous colour
  l, Right   Next colour
  1-9        Choose colour by position
  a          Add to cart
  x          Remove from cart
  t          Switch Shipping/Details

Reviews:
  v          Switch Reviews/Make a Review
  w          Write a review

Review form:
  text keys  Edit name or review
  1-5        Choose rating
  Left/Right Step through ratings
  Tab, Down  Next field
  Up         Previous field
  Backspace  Delete one character
  Enter      Submit review
  Esc        Back to reviews

Other:
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }

    const fn browsing_status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "q:quit  ?:help  h/l:colour  a:add  x:remove  w:review"
        } else {
            "h/l:colour  1-9:pick  a:add  x:remove  t:info  v:reviews  w:write review  ?:help  q:quit"
        }
    }
}

const fn form_status_hints(focus: FormField) -> &'static str {
    match focus {
        FormField::Name | FormField::Review => "type to edit  Tab:next field  Enter:submit  Esc:back",
        FormField::Rating => "1-5/Left/Right:rate  Tab:next field  Enter:submit  Esc:back",
        FormField::Submit => "Enter:submit  Shift+Tab:previous field  Esc:back",
    }
}
