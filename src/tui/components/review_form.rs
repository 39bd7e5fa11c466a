//! Review submission form shown in the "Make a Review" tab.

use std::fmt::{self, Write};

use crate::catalog::Rating;
use crate::tui::state::{FormField, ReviewFormState};

const ERROR_HEADING: &str = "Please correct the following error(s):";

/// Context for rendering the review form.
#[derive(Debug, Clone)]
pub struct ReviewFormViewContext<'a> {
    /// Form state to render.
    pub form: &'a ReviewFormState,
}

/// Component rendering the review form with its error list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewFormComponent;

impl ReviewFormComponent {
    /// Creates the component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the error list (if any) followed by the form fields.
    #[must_use]
    pub fn view(&self, ctx: &ReviewFormViewContext<'_>) -> String {
        let form = ctx.form;
        let mut output = String::new();

        // Ignoring error as writing to String cannot fail
        #[expect(
            clippy::let_underscore_must_use,
            reason = "Writing to String cannot fail"
        )]
        let _ = write_errors(&mut output, form);

        output.push_str(&field_line(form, FormField::Name, form.name()));
        output.push_str(&field_line(form, FormField::Review, form.review()));
        output.push_str(&field_line(
            form,
            FormField::Rating,
            &rating_choices(form.rating()),
        ));
        output.push_str(&submit_line(form));
        output
    }
}

fn write_errors(output: &mut String, form: &ReviewFormState) -> fmt::Result {
    if form.errors().is_empty() {
        return Ok(());
    }
    writeln!(output, "  {ERROR_HEADING}")?;
    for error in form.errors() {
        writeln!(output, "    - {}", error.message())?;
    }
    Ok(())
}

fn submit_line(form: &ReviewFormState) -> String {
    let marker = focus_marker(form, FormField::Submit);
    format!("{marker} [ {} ]\n", FormField::Submit.label())
}

fn focus_marker(form: &ReviewFormState, field: FormField) -> char {
    if form.focus() == field { '>' } else { ' ' }
}

fn field_line(form: &ReviewFormState, field: FormField, value: &str) -> String {
    let marker = focus_marker(form, field);
    let cursor = if form.focus() == field && field != FormField::Rating {
        "_"
    } else {
        ""
    };
    format!("{marker} {label:<8} {value}{cursor}\n", label = field.label())
}

fn rating_choices(selected: Option<Rating>) -> String {
    Rating::CHOICES
        .iter()
        .map(|choice| {
            if Some(*choice) == selected {
                format!("[{choice}]")
            } else {
                format!(" {choice} ")
            }
        })
        .collect::<Vec<_>>()
        .join("")
}
