//! Steps shared by every catalog page scenario.

use bubbletea_rs::Model;
use rstest_bdd_macros::{given, then, when};
use sockdrawer::Catalog;
use sockdrawer::tui::CatalogApp;
use sockdrawer::tui::components::test_utils::strip_ansi_codes;

use super::state::PageState;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 60;

#[given("a catalog page for a standard shopper")]
pub fn given_standard_page(page_state: &PageState) {
    page_state
        .app
        .set(CatalogApp::new(Catalog::socks(), false).with_dimensions(WIDTH, HEIGHT));
}

#[given("a catalog page for a premium shopper")]
pub fn given_premium_page(page_state: &PageState) {
    page_state
        .app
        .set(CatalogApp::new(Catalog::socks(), true).with_dimensions(WIDTH, HEIGHT));
}

#[given("a catalog page whose colours are sold out")]
pub fn given_sold_out_page(page_state: &PageState) {
    let mut catalog = Catalog::socks();
    for variant in &mut catalog.variants {
        variant.quantity = 0;
    }
    page_state
        .app
        .set(CatalogApp::new(catalog, false).with_dimensions(WIDTH, HEIGHT));
}

#[when("the page is rendered")]
pub fn when_page_is_rendered(page_state: &PageState) {
    let view = page_state.read(CatalogApp::view);
    page_state.rendered_view.set(strip_ansi_codes(&view));
}

#[then("the view shows {text}")]
pub fn then_view_shows(page_state: &PageState, text: String) {
    let view = page_state.rendered();
    assert!(view.contains(&text), "expected {text} in view:\n{view}");
}

#[then("the view does not show {text}")]
pub fn then_view_does_not_show(page_state: &PageState, text: String) {
    let view = page_state.rendered();
    assert!(!view.contains(&text), "unexpected {text} in view:\n{view}");
}
