//! Test utilities for inspecting rendered TUI output.
//!
//! Rendered views carry terminal styling (swatch colours, crossed-out and
//! dimmed text). These helpers remove it so tests can assert on the text.

/// Removes ANSI escape sequences from `s`.
///
/// # Example
///
/// ```
/// use sockdrawer::tui::components::test_utils::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[9mOut of Stock\x1b[0m"), "Out of Stock");
/// ```
#[must_use]
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            result.push(ch);
            continue;
        }
        // Skip the sequence up to and including its alphabetic terminator.
        for terminator in chars.by_ref() {
            if terminator.is_ascii_alphabetic() {
                break;
            }
        }
    }

    result
}

/// Strips styling and trailing padding, returning one entry per line.
#[must_use]
pub fn plain_lines(s: &str) -> Vec<String> {
    strip_ansi_codes(s)
        .lines()
        .map(|line| line.trim_end().to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("plain text", "plain text")]
    #[case::colour("\x1b[38;2;45;152;95m██\x1b[0m #2D985F", "██ #2D985F")]
    #[case::stacked("\x1b[2m\x1b[9mgone\x1b[0m", "gone")]
    #[case::empty("", "")]
    fn strips_escape_sequences(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_ansi_codes(input), expected);
    }

    #[test]
    fn plain_lines_trims_padding() {
        assert_eq!(
            plain_lines("one   \n\x1b[9mtwo\x1b[0m  \n"),
            vec!["one".to_owned(), "two".to_owned()]
        );
    }
}
