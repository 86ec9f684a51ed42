//! Static metadata injected after the document title.

use std::fmt::Write;

/// Default date line shown under the title.
pub const DEFAULT_DATE: &str = "January 2026";

/// Default abstract prose.
pub const DEFAULT_ABSTRACT: &str = "This document examines how the wrapper around a language model \
affects clinical documentation output. We processed the same psychiatric case through ChatGPT \
and through Psych Intake Brief. Both use GPT-5.2. The difference is in how the interaction \
gets structured.";

/// Meta line and abstract block placed directly after the first `<h1>`.
///
/// The content is not derived from the markdown source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    /// Text of the `<div class="meta">` line.
    pub date: String,
    /// Body of the `<div class="abstract">` block.
    pub abstract_text: String,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            date: DEFAULT_DATE.to_owned(),
            abstract_text: DEFAULT_ABSTRACT.to_owned(),
        }
    }
}

impl FrontMatter {
    /// Render the block that replaces the blank line after `</h1>`.
    ///
    /// Starts with a newline and ends with one, so the following content
    /// sits on the next line without a blank line in between.
    #[must_use]
    pub(crate) fn render(&self) -> String {
        let mut out = String::with_capacity(self.abstract_text.len() + 128);
        out.push('\n');
        let _ = writeln!(out, "<div class=\"meta\">{}</div>", self.date);
        out.push_str("<div class=\"abstract\">\n");
        out.push_str("<div class=\"abstract-title\">Abstract</div>\n");
        let _ = writeln!(out, "{}", self.abstract_text);
        out.push_str("</div>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_layout() {
        let front_matter = FrontMatter {
            date: "March 2025".to_owned(),
            abstract_text: "Short abstract.".to_owned(),
        };

        assert_eq!(
            front_matter.render(),
            "\n<div class=\"meta\">March 2025</div>\n<div class=\"abstract\">\n<div class=\"abstract-title\">Abstract</div>\nShort abstract.\n</div>\n"
        );
    }

    #[test]
    fn test_default_values() {
        let front_matter = FrontMatter::default();
        assert_eq!(front_matter.date, "January 2026");
        assert!(front_matter.abstract_text.starts_with("This document examines"));
        assert!(front_matter.abstract_text.ends_with("gets structured."));
    }
}
