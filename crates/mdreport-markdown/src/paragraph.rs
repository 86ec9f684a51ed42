//! Paragraph wrapping and the cleanup pass that corrects it.
//!
//! Wrapping is applied to every blank-line separated chunk that does not
//! already start with a tag. Cleanup then removes the stray tags this
//! leaves around block elements.

use std::sync::LazyLock;

use regex::Regex;

static EMPTY_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<p>\s*</p>").unwrap());
static OPEN_BEFORE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<p>\s*(<h\d|<hr|<figure|<table|<ul|<ol|<pre)").unwrap()
});
static CLOSE_AFTER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(</h\d>|</table>|</ul>|</ol>|</pre>|</figure>)\s*</p>").unwrap()
});

/// Wrap plain chunks in `<p>`.
///
/// Wrapped chunks are trimmed; chunks left alone keep their whitespace.
pub(crate) fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(|chunk| {
            let trimmed = chunk.trim();
            if trimmed.is_empty() || trimmed.starts_with('<') {
                chunk.to_owned()
            } else {
                format!("<p>{trimmed}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Remove artifacts of blind paragraph wrapping.
pub(crate) fn cleanup(text: &str) -> String {
    let text = text.replace("\n</p>", "</p>");
    let text = EMPTY_PARAGRAPH.replace_all(&text, "");
    let text = OPEN_BEFORE_BLOCK.replace_all(&text, "${1}");
    CLOSE_AFTER_BLOCK.replace_all(&text, "${1}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_chunks_wrapped() {
        assert_eq!(
            paragraphs("First line\nsame paragraph\n\nSecond"),
            "<p>First line\nsame paragraph</p>\n\n<p>Second</p>"
        );
    }

    #[test]
    fn test_tagged_chunk_untouched() {
        assert_eq!(
            paragraphs("<h2>Title</h2>\n\ntext"),
            "<h2>Title</h2>\n\n<p>text</p>"
        );
    }

    #[test]
    fn test_chunk_whitespace_trimmed_when_wrapped() {
        assert_eq!(paragraphs("  padded  "), "<p>padded</p>");
    }

    #[test]
    fn test_blank_chunks_kept() {
        assert_eq!(paragraphs("a\n\n\n\nb"), "<p>a</p>\n\n\n\n<p>b</p>");
    }

    #[test]
    fn test_cleanup_trailing_newline() {
        assert_eq!(cleanup("<p>text\n</p>"), "<p>text</p>");
    }

    #[test]
    fn test_cleanup_empty_paragraph() {
        assert_eq!(cleanup("a<p> \n </p>b"), "ab");
    }

    #[test]
    fn test_cleanup_open_before_block() {
        assert_eq!(cleanup("<p> <table>"), "<table>");
        assert_eq!(cleanup("<p><h3>x</h3>"), "<h3>x</h3>");
    }

    #[test]
    fn test_cleanup_close_after_block() {
        assert_eq!(
            cleanup("<p>intro\n<ul>\n<li>a</li>\n</ul></p>"),
            "<p>intro\n<ul>\n<li>a</li>\n</ul>"
        );
        assert_eq!(cleanup("</figure>\n</p>"), "</figure>");
    }

    #[test]
    fn test_cleanup_leaves_inline_paragraphs() {
        assert_eq!(
            cleanup("<p><strong>x</strong></p>"),
            "<p><strong>x</strong></p>"
        );
    }
}
