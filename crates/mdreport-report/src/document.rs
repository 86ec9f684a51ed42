//! Standalone HTML document around the converted fragment.

use std::fmt::Write;

use mdreport_config::{DEFAULT_STYLESHEET, DEFAULT_TITLE};

/// HTML document shell: title and stylesheet link around a body fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    title: String,
    stylesheet_href: String,
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_STYLESHEET)
    }
}

impl HtmlDocument {
    /// Create a document shell.
    #[must_use]
    pub fn new(title: impl Into<String>, stylesheet_href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylesheet_href: stylesheet_href.into(),
        }
    }

    /// Render a complete document with `body` inserted verbatim.
    #[must_use]
    pub fn render(&self, body: &str) -> String {
        let mut html = String::with_capacity(body.len() + 256);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        let _ = writeln!(html, "    <title>{}</title>", escape(&self.title));
        let _ = writeln!(
            html,
            "    <link rel=\"stylesheet\" href=\"{}\">",
            escape(&self.stylesheet_href)
        );
        html.push_str("</head>\n<body>\n");
        html.push_str(body);
        html.push_str("\n</body>\n</html>");
        html
    }
}

/// Escape text for an element body or a double-quoted attribute.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
