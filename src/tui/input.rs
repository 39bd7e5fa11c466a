//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The mapping depends on whether the
//! review form is open: while it is, printable keys edit the form instead of
//! triggering page shortcuts.

use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use super::state::{FormField, ProductTab};
use crate::catalog::Rating;

/// Which part of the page receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the product: shortcuts for variants, cart, and tabs.
    Browsing,
    /// The "Make a Review" tab is active; keys edit the focused field.
    ReviewForm(FormField),
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(key: &KeyMsg, context: InputContext) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('c') => Some(AppMsg::Quit),
            _ => None,
        };
    }

    match context {
        InputContext::Browsing => map_browsing_key(key.key),
        InputContext::ReviewForm(field) => map_form_key(key.key, field),
    }
}

fn map_browsing_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::PreviousVariant),
        KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::NextVariant),
        KeyCode::Char(digit @ '1'..='9') => variant_index(digit).map(AppMsg::SelectVariant),
        KeyCode::Char('a') => Some(AppMsg::AddToCart),
        KeyCode::Char('x') => Some(AppMsg::RemoveFromCart),
        KeyCode::Char('t') => Some(AppMsg::CycleInfoTab),
        KeyCode::Char('v') => Some(AppMsg::CycleProductTab),
        KeyCode::Char('w') => Some(AppMsg::SelectProductTab(ProductTab::MakeAReview)),
        _ => None,
    }
}

fn map_form_key(code: KeyCode, field: FormField) -> Option<AppMsg> {
    match code {
        KeyCode::Esc => return Some(AppMsg::SelectProductTab(ProductTab::Reviews)),
        KeyCode::Tab | KeyCode::Down => return Some(AppMsg::FormFocusNext),
        KeyCode::BackTab | KeyCode::Up => return Some(AppMsg::FormFocusPrevious),
        KeyCode::Enter => return Some(AppMsg::SubmitReview),
        KeyCode::Backspace => return Some(AppMsg::FormBackspace),
        _ => {}
    }

    match field {
        FormField::Name | FormField::Review => match code {
            KeyCode::Char(character) => Some(AppMsg::FormInsertChar(character)),
            _ => None,
        },
        FormField::Rating => map_rating_key(code),
        FormField::Submit => match code {
            KeyCode::Char(' ') => Some(AppMsg::SubmitReview),
            _ => None,
        },
    }
}

fn map_rating_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char(digit @ '1'..='5') => digit
            .to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .and_then(|value| Rating::new(value).ok())
            .map(AppMsg::FormSetRating),
        KeyCode::Right => Some(AppMsg::FormStepRating {
            towards_lower: true,
        }),
        KeyCode::Left => Some(AppMsg::FormStepRating {
            towards_lower: false,
        }),
        _ => None,
    }
}

fn variant_index(digit: char) -> Option<usize> {
    digit
        .to_digit(10)
        .and_then(|value| usize::try_from(value).ok())
        .map(|value| value.saturating_sub(1))
}
