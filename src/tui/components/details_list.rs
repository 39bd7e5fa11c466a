//! Bullet list of product details.

/// Renders each detail as an indented bullet line.
#[must_use]
pub fn render_details(details: &[String]) -> String {
    details
        .iter()
        .map(|detail| format!("  • {detail}\n"))
        .collect()
}
