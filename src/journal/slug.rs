//! Slug generation
//!
//! Turns a free-text topic into a filesystem-safe identifier used in
//! entry filenames and as a secondary lookup key.

/// Create a filesystem-safe slug from a topic.
///
/// Lowercases the input, drops every character that is not alphanumeric,
/// whitespace, or a hyphen, collapses runs of whitespace and hyphens into a
/// single hyphen, and trims leading/trailing hyphens.
///
/// The function is pure and idempotent: `slugify(slugify(x)) == slugify(x)`.
/// An empty input yields an empty string.
pub fn slugify(topic: &str) -> String {
    let lowered = topic.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_separator = true;
        }
        // Any other character is removed outright and does not
        // introduce a separator on its own.
    }

    slug
}
