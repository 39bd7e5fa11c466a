//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, deliveries from the page
//! event bus, and system events.

use crate::catalog::{Rating, Review};

use super::state::{InfoTab, ProductTab};

/// Messages for the catalog page TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Product
    /// Select the variant at the given zero-based index.
    SelectVariant(usize),
    /// Select the swatch to the right.
    NextVariant,
    /// Select the swatch to the left.
    PreviousVariant,
    /// Add the selected variant to the cart.
    AddToCart,
    /// Remove every entry of the selected variant from the cart.
    RemoveFromCart,

    // Tabs
    /// Activate an info tab.
    SelectInfoTab(InfoTab),
    /// Activate the next info tab.
    CycleInfoTab,
    /// Activate a product tab.
    SelectProductTab(ProductTab),
    /// Activate the next product tab.
    CycleProductTab,

    // Review form
    /// Type a character into the focused field.
    FormInsertChar(char),
    /// Delete from the focused field.
    FormBackspace,
    /// Focus the next form field.
    FormFocusNext,
    /// Focus the previous form field.
    FormFocusPrevious,
    /// Choose a rating.
    FormSetRating(Rating),
    /// Step through the rating list.
    FormStepRating {
        /// Move towards lower ratings when true.
        towards_lower: bool,
    },
    /// Validate and submit the review form.
    SubmitReview,

    // Event bus deliveries
    /// A submitted review reached the product widget.
    ReviewReceived(Review),

    // Application lifecycle
    /// Startup message that triggers the first render.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for messages handled by the product widget.
    #[must_use]
    pub const fn is_product(&self) -> bool {
        matches!(
            self,
            Self::SelectVariant(_)
                | Self::NextVariant
                | Self::PreviousVariant
                | Self::AddToCart
                | Self::RemoveFromCart
                | Self::ReviewReceived(_)
        )
    }

    /// Returns true for tab selection messages.
    #[must_use]
    pub const fn is_tab(&self) -> bool {
        matches!(
            self,
            Self::SelectInfoTab(_)
                | Self::CycleInfoTab
                | Self::SelectProductTab(_)
                | Self::CycleProductTab
        )
    }

    /// Returns true for review form messages.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::FormInsertChar(_)
                | Self::FormBackspace
                | Self::FormFocusNext
                | Self::FormFocusPrevious
                | Self::FormSetRating(_)
                | Self::FormStepRating { .. }
                | Self::SubmitReview
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::product(AppMsg::AddToCart, (true, false, false))]
    #[case::delivery(AppMsg::ReviewReceived(Review {
        name: "Ana".to_owned(),
        review: "Warm".to_owned(),
        rating: Rating::new(5).expect("valid rating"),
    }), (true, false, false))]
    #[case::tab(AppMsg::CycleInfoTab, (false, true, false))]
    #[case::form(AppMsg::SubmitReview, (false, false, true))]
    #[case::lifecycle(AppMsg::Quit, (false, false, false))]
    fn categories_are_disjoint(#[case] msg: AppMsg, #[case] expected: (bool, bool, bool)) {
        assert_eq!((msg.is_product(), msg.is_tab(), msg.is_form()), expected);
    }
}
