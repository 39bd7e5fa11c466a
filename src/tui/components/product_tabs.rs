//! Reviews/Make-a-Review tab widget shown under the product.

use super::review_form::{ReviewFormComponent, ReviewFormViewContext};
use super::review_list::{ReviewListComponent, ReviewListViewContext};
use super::tab_bar::render_tab_bar;
use crate::catalog::Review;
use crate::tui::state::{ProductTab, ReviewFormState, TabState};

/// Context for rendering the product tabs.
#[derive(Debug, Clone)]
pub struct ProductTabsViewContext<'a> {
    /// Active tab.
    pub tabs: &'a TabState<ProductTab>,
    /// Reviews received by the product.
    pub reviews: &'a [Review],
    /// Review form state.
    pub form: &'a ReviewFormState,
    /// Maximum width in columns.
    pub max_width: usize,
}

/// Tab widget switching between the review list and the review form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductTabsComponent {
    review_list: ReviewListComponent,
    review_form: ReviewFormComponent,
}

impl ProductTabsComponent {
    /// Creates the component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            review_list: ReviewListComponent::new(),
            review_form: ReviewFormComponent::new(),
        }
    }

    /// Renders the tab bar followed by the active pane only.
    #[must_use]
    pub fn view(&self, ctx: &ProductTabsViewContext<'_>) -> String {
        let mut output = render_tab_bar(ctx.tabs);
        let pane = match ctx.tabs.selected() {
            ProductTab::Reviews => self.review_list.view(&ReviewListViewContext {
                reviews: ctx.reviews,
                max_width: ctx.max_width,
            }),
            ProductTab::MakeAReview => self
                .review_form
                .view(&ReviewFormViewContext { form: ctx.form }),
        };
        output.push_str(&pane);
        output
    }
}
