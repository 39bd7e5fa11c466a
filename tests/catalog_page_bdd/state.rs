//! Scenario state for catalog page BDD tests.

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use sockdrawer::tui::CatalogApp;
use sockdrawer::tui::messages::AppMsg;

/// State shared across steps in a catalog page scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct PageState {
    /// The page under test.
    pub(crate) app: Slot<CatalogApp>,
    /// The rendered view with styling removed.
    pub(crate) rendered_view: Slot<String>,
}

impl PageState {
    /// Sends a message to the page.
    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    pub(crate) fn send(&self, msg: &AppMsg) {
        self.app
            .with_mut(|app| {
                app.handle_message(msg);
            })
            .expect("page not mounted");
    }

    /// Reads a value from the page.
    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    pub(crate) fn read<T>(&self, read: impl FnOnce(&CatalogApp) -> T) -> T {
        self.app.with_ref(read).expect("page not mounted")
    }

    /// Returns the last rendered view.
    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    pub(crate) fn rendered(&self) -> String {
        self.rendered_view
            .with_ref(Clone::clone)
            .expect("view not rendered")
    }
}
