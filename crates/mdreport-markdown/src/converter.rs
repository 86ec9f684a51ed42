//! Markdown to HTML conversion pipeline.

use crate::code::{inline_code, stash_fenced_blocks};
use crate::front_matter::FrontMatter;
use crate::headings::{headings, rules, title};
use crate::inline::{emphasis, images};
use crate::list::{bullet_lists, ordered_lists};
use crate::paragraph::{cleanup, paragraphs};
use crate::table::tables;

/// Converts a whole markdown document into an HTML fragment.
///
/// Conversion is a fixed sequence of text substitutions rather than a
/// parse. Pass order is significant:
///
/// 1. title (plus front matter), headings, horizontal rules
/// 2. fenced code blocks, then inline code
/// 3. bold, then italic
/// 4. images, tables, unordered lists, ordered lists
/// 5. paragraph wrapping, then cleanup
///
/// Code block bodies are held out of steps 2 to 4 and come back verbatim
/// (apart from `<`/`>` escaping) before paragraph wrapping.
///
/// Malformed markdown produces malformed HTML; conversion never fails.
///
/// # Example
///
/// ```
/// use mdreport_markdown::MarkdownConverter;
///
/// let html = MarkdownConverter::new().convert("Hello **world**");
/// assert_eq!(html, "<p>Hello <strong>world</strong></p>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    front_matter: FrontMatter,
}

impl MarkdownConverter {
    /// Create a converter with the default front matter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the front matter injected after the title.
    #[must_use]
    pub fn with_front_matter(mut self, front_matter: FrontMatter) -> Self {
        self.front_matter = front_matter;
        self
    }

    /// Convert markdown to an HTML fragment.
    #[must_use]
    pub fn convert(&self, markdown: &str) -> String {
        let text = title(markdown, &self.front_matter);
        let text = headings(&text);
        let text = rules(&text);

        let (text, code_blocks) = stash_fenced_blocks(&text);
        let text = inline_code(&text);

        let text = emphasis(&text);
        let text = images(&text);

        let text = tables(&text);
        let text = bullet_lists(&text);
        let text = ordered_lists(&text);
        let text = code_blocks.restore(&text);

        let text = paragraphs(&text);
        let html = cleanup(&text);

        tracing::debug!(
            input_len = markdown.len(),
            output_len = html.len(),
            "Converted markdown"
        );
        html
    }
}
