//! UI components for the catalog page TUI.
//!
//! Each component renders a borrowed view context into a string. Components
//! hold no page state of their own; the application model owns the state and
//! passes the slices each component needs.

mod details_list;
mod info_tabs;
mod product_tabs;
mod product_view;
mod review_form;
mod review_list;
mod tab_bar;
mod text_fit;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use details_list::render_details;
pub use info_tabs::{InfoTabsComponent, InfoTabsViewContext};
pub use product_tabs::{ProductTabsComponent, ProductTabsViewContext};
pub use product_view::{ProductViewComponent, ProductViewContext};
pub use review_form::{ReviewFormComponent, ReviewFormViewContext};
pub use review_list::{NO_REVIEWS_MESSAGE, ReviewListComponent, ReviewListViewContext};
pub use tab_bar::render_tab_bar;
pub use text_fit::{fit_line, truncate_to_width};
