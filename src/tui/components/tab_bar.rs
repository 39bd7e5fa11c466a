//! Tab bar shared by the info and product tab widgets.

use crate::tui::state::{Tab, TabState};

/// Renders every tab label on one line, bracketing the active one.
#[must_use]
pub fn render_tab_bar<T: Tab>(state: &TabState<T>) -> String {
    let labels: Vec<String> = T::ALL
        .iter()
        .map(|tab| {
            if state.is_active(*tab) {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect();
    let mut line = labels.join(" ").trim_end().to_owned();
    line.push('\n');
    line
}
