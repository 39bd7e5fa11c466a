//! Review list shown in the "Reviews" tab.
//!
//! Reviews are listed in submission order with the reviewer, the rating,
//! and the review text clipped to the available width.

use super::text_fit::truncate_to_width;
use crate::catalog::Review;

/// Message shown before any review has been submitted.
pub const NO_REVIEWS_MESSAGE: &str = "There are no reviews yet.";

/// Context for rendering the review list view.
#[derive(Debug, Clone)]
pub struct ReviewListViewContext<'a> {
    /// Reviews received by the product, oldest first.
    pub reviews: &'a [Review],
    /// Maximum width in columns for review text.
    pub max_width: usize,
}

/// Component for displaying submitted reviews.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewListComponent;

impl ReviewListComponent {
    /// Creates a new review list component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the review list as a string.
    #[must_use]
    pub fn view(&self, ctx: &ReviewListViewContext<'_>) -> String {
        if ctx.reviews.is_empty() {
            return format!("  {NO_REVIEWS_MESSAGE}\n");
        }

        let text_width = ctx.max_width.saturating_sub(4);
        ctx.reviews
            .iter()
            .map(|review| Self::format_review(review, text_width))
            .collect()
    }

    fn format_review(review: &Review, text_width: usize) -> String {
        let body = truncate_to_width(&review.review, text_width);
        format!(
            "  {name}  ({rating}/5)\n    {body}\n",
            name = review.name,
            rating = review.rating,
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::catalog::Rating;

    fn review(name: &str, text: &str, stars: u8) -> Review {
        Review {
            name: name.to_owned(),
            review: text.to_owned(),
            rating: Rating::new(stars).expect("valid rating"),
        }
    }

    #[fixture]
    fn two_reviews() -> Vec<Review> {
        vec![
            review("Ana", "Great socks", 5),
            review("Ben", "A bit itchy", 2),
        ]
    }

    #[test]
    fn view_shows_placeholder_when_empty() {
        let ctx = ReviewListViewContext {
            reviews: &[],
            max_width: 80,
        };
        assert_eq!(
            ReviewListComponent::new().view(&ctx),
            "  There are no reviews yet.\n"
        );
    }

    #[rstest]
    fn view_lists_reviews_in_submission_order(two_reviews: Vec<Review>) {
        let ctx = ReviewListViewContext {
            reviews: &two_reviews,
            max_width: 80,
        };

        let output = ReviewListComponent::new().view(&ctx);

        assert_eq!(
            output,
            "  Ana  (5/5)\n    Great socks\n  Ben  (2/5)\n    A bit itchy\n"
        );
    }

    #[test]
    fn long_review_text_is_clipped() {
        let reviews = vec![review("Ana", &"warm ".repeat(30), 4)];
        let ctx = ReviewListViewContext {
            reviews: &reviews,
            max_width: 20,
        };

        let output = ReviewListComponent::new().view(&ctx);

        assert!(output.contains("…"), "{output}");
        assert!(output.lines().all(|line| line.chars().count() <= 20));
    }
}
