//! Unordered and ordered list passes.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static BULLET_LIST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^\s*[-*]\s+.+\n?)+").unwrap());
static ORDERED_LIST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^\s*\d+\.\s+.+\n?)+").unwrap());
static BULLET_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-*]\s*").unwrap());
static ORDERED_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\d+\.\s*").unwrap());

/// List flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Bullet => "ul",
            Self::Ordered => "ol",
        }
    }

    fn marker(self) -> &'static Regex {
        match self {
            Self::Bullet => &*BULLET_MARKER,
            Self::Ordered => &*ORDERED_MARKER,
        }
    }
}

/// Convert runs of `-` / `*` items to `<ul>`.
pub(crate) fn bullet_lists(text: &str) -> String {
    BULLET_LIST_PATTERN
        .replace_all(text, |caps: &Captures<'_>| {
            format_list(&caps[0], ListKind::Bullet)
        })
        .into_owned()
}

/// Convert runs of `1.` items to `<ol>`.
pub(crate) fn ordered_lists(text: &str) -> String {
    ORDERED_LIST_PATTERN
        .replace_all(text, |caps: &Captures<'_>| {
            format_list(&caps[0], ListKind::Ordered)
        })
        .into_owned()
}

/// Format one list block. Blank lines swallowed by the run become empty items.
fn format_list(block: &str, kind: ListKind) -> String {
    let tag = kind.tag();
    let mut html = format!("<{tag}>\n");
    for item in block.trim().split('\n') {
        let item = kind.marker().replace(item, "");
        let _ = writeln!(html, "<li>{item}</li>");
    }
    let _ = write!(html, "</{tag}>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bullet_list() {
        assert_eq!(
            bullet_lists("- one\n- two\n"),
            "<ul>\n<li>one</li>\n<li>two</li>\n</ul>"
        );
    }

    #[test]
    fn test_asterisk_and_indented_items() {
        assert_eq!(
            bullet_lists("* one\n  - two"),
            "<ul>\n<li>one</li>\n<li>two</li>\n</ul>"
        );
    }

    #[test]
    fn test_marker_requires_whitespace() {
        assert_eq!(bullet_lists("-not a list"), "-not a list");
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            ordered_lists("1. first\n2. second\n10. tenth\n"),
            "<ol>\n<li>first</li>\n<li>second</li>\n<li>tenth</li>\n</ol>"
        );
    }

    #[test]
    fn test_list_swallows_preceding_blank_line() {
        assert_eq!(
            bullet_lists("Intro\n\n- a\n- b\n\nOutro"),
            "Intro\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\nOutro"
        );
    }

    #[test]
    fn test_blank_line_between_items_keeps_one_list() {
        assert_eq!(
            bullet_lists("- a\n\n- b\n"),
            "<ul>\n<li>a</li>\n<li></li>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn test_ordered_marker_not_bullet() {
        assert_eq!(bullet_lists("1. first\n"), "1. first\n");
        assert_eq!(ordered_lists("- a\n"), "- a\n");
    }
}
