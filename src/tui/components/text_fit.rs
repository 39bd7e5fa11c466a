//! Width helpers for fitting rendered text into terminal columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Shortens `text` to at most `max_width` display columns.
///
/// Text that already fits is returned unchanged; longer text is cut and
/// ends with an ellipsis. Only the first line of `text` is considered.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let first_line = text.lines().next().unwrap_or("").trim_end();
    if UnicodeWidthStr::width(first_line) <= max_width {
        return first_line.to_owned();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0_usize;
    let mut output = String::new();
    for ch in first_line.chars() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(width) > budget {
            break;
        }
        used = used.saturating_add(width);
        output.push(ch);
    }
    output.push(ELLIPSIS);
    output
}

/// Pads or clips one rendered line to exactly `width` visible columns.
///
/// ANSI escape sequences are copied through without counting towards the
/// width; a reset is appended when styling was cut off mid-line.
#[must_use]
pub fn fit_line(line: &str, width: usize) -> String {
    let mut output = String::with_capacity(line.len().max(width));
    let mut visible = 0_usize;
    let mut chars = line.chars();
    let mut styled = false;
    let mut clipped = false;

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            styled = true;
            output.push(ch);
            copy_escape_sequence(&mut chars, &mut output);
            continue;
        }
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(char_width) > width {
            clipped = true;
            break;
        }
        visible = visible.saturating_add(char_width);
        output.push(ch);
    }

    if styled && clipped {
        output.push_str("\x1b[0m");
    }
    output.push_str(&" ".repeat(width.saturating_sub(visible)));
    output
}

fn copy_escape_sequence(chars: &mut std::str::Chars<'_>, output: &mut String) {
    for ch in chars.by_ref() {
        output.push(ch);
        if ch.is_ascii_alphabetic() {
            break;
        }
    }
}
