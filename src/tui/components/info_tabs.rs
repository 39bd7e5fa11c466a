//! Shipping/Details tab widget shown beside the product.

use std::fmt::Write;

use super::details_list::render_details;
use super::tab_bar::render_tab_bar;
use crate::tui::state::{InfoTab, TabState};

/// Context for rendering the info tabs.
#[derive(Debug, Clone)]
pub struct InfoTabsViewContext<'a> {
    /// Active tab.
    pub tabs: &'a TabState<InfoTab>,
    /// Shipping cost label.
    pub shipping: &'a str,
    /// Product detail bullet points.
    pub details: &'a [String],
}

/// Tab widget switching between shipping cost and product details.
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoTabsComponent;

impl InfoTabsComponent {
    /// Creates the component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the tab bar followed by the active pane only.
    #[must_use]
    pub fn view(&self, ctx: &InfoTabsViewContext<'_>) -> String {
        let mut output = render_tab_bar(ctx.tabs);
        match ctx.tabs.selected() {
            InfoTab::Shipping => {
                // Ignoring error as writing to String cannot fail
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Writing to String cannot fail"
                )]
                let _ = writeln!(output, "  Shipping: {}", ctx.shipping);
            }
            InfoTab::Details => output.push_str(&render_details(ctx.details)),
        }
        output
    }
}
