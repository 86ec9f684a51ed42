//! Emphasis and image passes.

use std::sync::LazyLock;

use regex::Regex;

/// Bold content may hold balanced single-asterisk spans, so a nested
/// italic survives until the italic pass runs. Neither span crosses a line.
static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*((?:[^*\n]|\*[^*\n]+\*)+?)\*\*").unwrap());
/// Italic content must not start or end with whitespace, so `* item` list
/// markers and `2 * 3 * 4` are left alone.
static ITALIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\s](?:[^*\n]*[^*\s])?)\*").unwrap());
static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// Convert `**bold**` then `*italic*`.
pub(crate) fn emphasis(text: &str) -> String {
    let text = BOLD_PATTERN.replace_all(text, "<strong>${1}</strong>");
    ITALIC_PATTERN
        .replace_all(&text, "<em>${1}</em>")
        .into_owned()
}

/// Convert `![alt](src)` to a captioned figure.
pub(crate) fn images(text: &str) -> String {
    IMAGE_PATTERN
        .replace_all(
            text,
            r#"<figure><img src="${2}" alt="${1}"><figcaption>${1}</figcaption></figure>"#,
        )
        .into_owned()
}
