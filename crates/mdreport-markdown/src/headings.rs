//! Title, heading and horizontal rule passes.

use std::sync::LazyLock;

use regex::Regex;

use crate::front_matter::FrontMatter;

static H1_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());
static H2_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static H3_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());
static RULE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^---+$").unwrap());

/// Convert `# ` lines to `<h1>` and inject front matter after the first one.
///
/// Injection only happens when the first `</h1>` is followed by a blank
/// line; the blank line itself is consumed.
pub(crate) fn title(text: &str, front_matter: &FrontMatter) -> String {
    let text = H1_PATTERN.replace_all(text, "<h1>${1}</h1>");
    let block = format!("</h1>{}", front_matter.render());
    text.replacen("</h1>\n\n", &block, 1)
}

/// Convert `## ` and `### ` lines.
pub(crate) fn headings(text: &str) -> String {
    let text = H2_PATTERN.replace_all(text, "<h2>${1}</h2>");
    H3_PATTERN.replace_all(&text, "<h3>${1}</h3>").into_owned()
}

/// Convert lines of three or more hyphens to `<hr>`.
pub(crate) fn rules(text: &str) -> String {
    RULE_PATTERN.replace_all(text, "<hr>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn short_front_matter() -> FrontMatter {
        FrontMatter {
            date: "D".to_owned(),
            abstract_text: "A".to_owned(),
        }
    }

    #[test]
    fn test_title_with_front_matter() {
        let html = title("# Report\n\nBody", &short_front_matter());
        assert_eq!(
            html,
            "<h1>Report</h1>\n<div class=\"meta\">D</div>\n<div class=\"abstract\">\n<div class=\"abstract-title\">Abstract</div>\nA\n</div>\nBody"
        );
    }

    #[test]
    fn test_front_matter_injected_once() {
        let html = title("# One\n\nx\n\n# Two\n\ny", &short_front_matter());
        assert_eq!(html.matches("<h1>").count(), 2);
        assert_eq!(html.matches("class=\"meta\"").count(), 1);
        assert!(html.contains("<h1>Two</h1>\n\ny"));
    }

    #[test]
    fn test_title_without_blank_line_has_no_front_matter() {
        let html = title("# Report\nBody", &short_front_matter());
        assert_eq!(html, "<h1>Report</h1>\nBody");
    }

    #[test]
    fn test_title_requires_space() {
        let html = title("#hashtag", &short_front_matter());
        assert_eq!(html, "#hashtag");
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            headings("## Section\ntext\n### Sub"),
            "<h2>Section</h2>\ntext\n<h3>Sub</h3>"
        );
    }

    #[test]
    fn test_heading_must_start_line() {
        assert_eq!(headings("text ## not"), "text ## not");
    }

    #[test]
    fn test_rules() {
        assert_eq!(rules("a\n---\nb\n-----"), "a\n<hr>\nb\n<hr>");
        assert_eq!(rules("--"), "--");
        assert_eq!(rules("--- x"), "--- x");
    }
}
