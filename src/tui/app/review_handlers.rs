//! Review form handlers for the catalog TUI.
//!
//! Form edits stay local to the form state. A successful submission is
//! published on the page event bus and every message the subscribers hand
//! back is applied before this update returns.

use bubbletea_rs::Cmd;

use super::CatalogApp;
use crate::bus::BusEvent;
use crate::tui::messages::AppMsg;

impl CatalogApp {
    /// Dispatches review form messages to their handlers.
    pub(super) fn handle_form_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FormInsertChar(character) => {
                self.review_form.insert_char(*character);
                None
            }
            AppMsg::FormBackspace => {
                self.review_form.backspace();
                None
            }
            AppMsg::FormFocusNext => {
                self.review_form.focus_next();
                None
            }
            AppMsg::FormFocusPrevious => {
                self.review_form.focus_previous();
                None
            }
            AppMsg::FormSetRating(rating) => {
                self.review_form.set_rating(*rating);
                None
            }
            AppMsg::FormStepRating { towards_lower } => {
                self.review_form.step_rating(*towards_lower);
                None
            }
            AppMsg::SubmitReview => self.handle_submit_review(),
            _ => {
                // Unreachable: caller filters to form messages.
                None
            }
        }
    }

    /// Validates the form and publishes the review when it is complete.
    ///
    /// Nothing is published when validation fails; the form keeps its input
    /// and shows the missing-field messages.
    fn handle_submit_review(&mut self) -> Option<Cmd> {
        let review = match self.review_form.submit() {
            Ok(review) => review,
            Err(error) => {
                tracing::debug!(%error, "review submission rejected");
                return None;
            }
        };

        let deliveries = self.bus.publish(&BusEvent::ReviewSubmitted(review));
        for delivery in &deliveries {
            self.apply_delivery(delivery);
        }
        None
    }
}
