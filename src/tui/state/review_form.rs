//! Review form state and validation.
//!
//! The form holds the reviewer name, the review text, and an optional
//! rating chosen from the descending list 5..1. Submitting validates that
//! all three are present; on success the fields are cleared and the review
//! is handed back for publication, on failure one error per missing field
//! replaces the previous error list.

use thiserror::Error;

use crate::catalog::{Rating, Review};

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Reviewer name input.
    #[default]
    Name,
    /// Review text area.
    Review,
    /// Rating selector.
    Rating,
    /// Submit button.
    Submit,
}

impl FormField {
    const ORDER: [Self; 4] = [Self::Name, Self::Review, Self::Rating, Self::Submit];

    /// Label rendered beside the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name:",
            Self::Review => "Review:",
            Self::Rating => "Rating:",
            Self::Submit => "Submit",
        }
    }

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER
            .get(self.position().saturating_add(1))
            .or_else(|| Self::ORDER.first())
            .copied()
            .unwrap_or_default()
    }

    fn previous(self) -> Self {
        self.position()
            .checked_sub(1)
            .and_then(|index| Self::ORDER.get(index))
            .or_else(|| Self::ORDER.last())
            .copied()
            .unwrap_or_default()
    }
}

/// A required field that was left empty on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// The name was empty.
    Name,
    /// The review text was empty.
    Review,
    /// No rating was chosen.
    Rating,
}

impl RequiredField {
    /// Human-readable message shown in the error list.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Name => "Name required.",
            Self::Review => "Review required.",
            Self::Rating => "Rating required.",
        }
    }
}

/// Errors returned when a review cannot be submitted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewFormError {
    /// One or more required fields were empty.
    #[error("review is missing {} required field(s)", .missing.len())]
    MissingFields {
        /// The empty fields, in form order.
        missing: Vec<RequiredField>,
    },
}

/// Local state of the review form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFormState {
    name: String,
    review: String,
    rating: Option<Rating>,
    errors: Vec<RequiredField>,
    focus: FormField,
}

impl ReviewFormState {
    /// Creates an empty form focused on the name field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current reviewer name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Current review text.
    #[must_use]
    pub const fn review(&self) -> &str {
        self.review.as_str()
    }

    /// Chosen rating, if any.
    #[must_use]
    pub const fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Errors from the last submission attempt.
    #[must_use]
    pub fn errors(&self) -> &[RequiredField] {
        &self.errors
    }

    /// Focused field.
    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    /// Moves focus to the next field, wrapping to the name field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field, wrapping to the submit button.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Replaces the reviewer name.
    pub fn set_name(&mut self, name: &str) {
        name.clone_into(&mut self.name);
    }

    /// Replaces the review text.
    pub fn set_review(&mut self, review: &str) {
        review.clone_into(&mut self.review);
    }

    /// Chooses a rating.
    pub const fn set_rating(&mut self, rating: Rating) {
        self.rating = Some(rating);
    }

    /// Clears the chosen rating.
    pub const fn clear_rating(&mut self) {
        self.rating = None;
    }

    /// Steps through the descending rating list.
    ///
    /// Moving down from no rating picks the highest, moving up picks the
    /// lowest. The selection stops at either end of the list.
    pub fn step_rating(&mut self, towards_lower: bool) {
        let choices = Rating::CHOICES;
        let current = self
            .rating
            .and_then(|rating| choices.iter().position(|choice| *choice == rating));
        let next = match (current, towards_lower) {
            (None, true) => choices.first(),
            (None, false) => choices.last(),
            (Some(index), true) => choices
                .get(index.saturating_add(1))
                .or_else(|| choices.last()),
            (Some(index), false) => choices.get(index.saturating_sub(1)),
        };
        self.rating = next.copied();
    }

    /// Types `character` into the focused text field.
    ///
    /// Returns false when the focused field does not accept text.
    pub fn insert_char(&mut self, character: char) -> bool {
        match self.focus {
            FormField::Name => self.name.push(character),
            FormField::Review => self.review.push(character),
            FormField::Rating | FormField::Submit => return false,
        }
        true
    }

    /// Deletes the last character of the focused text field, or clears the
    /// rating when the rating selector is focused.
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Name => {
                let _ = self.name.pop();
            }
            FormField::Review => {
                let _ = self.review.pop();
            }
            FormField::Rating => self.clear_rating(),
            FormField::Submit => {}
        }
    }

    /// Validates the form and, when complete, returns the review.
    ///
    /// Previous errors are discarded at the start of every attempt. On
    /// success all three fields are cleared and focus returns to the name.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewFormError::MissingFields`] listing every empty
    /// required field. The same fields are stored as the form's error list
    /// and the entered values are kept.
    pub fn submit(&mut self) -> Result<Review, ReviewFormError> {
        self.errors.clear();

        let missing = self.missing_fields();
        let rating = match (missing.is_empty(), self.rating) {
            (true, Some(rating)) => rating,
            _ => {
                self.errors.clone_from(&missing);
                return Err(ReviewFormError::MissingFields { missing });
            }
        };

        let review = Review {
            name: std::mem::take(&mut self.name),
            review: std::mem::take(&mut self.review),
            rating,
        };
        self.rating = None;
        self.focus = FormField::Name;
        Ok(review)
    }

    fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.review.is_empty() {
            missing.push(RequiredField::Review);
        }
        if self.rating.is_none() {
            missing.push(RequiredField::Rating);
        }
        missing
    }
}
