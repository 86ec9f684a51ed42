//! Regex-based markdown to HTML conversion for mdreport.
//!
//! [`MarkdownConverter`] applies an ordered sequence of substitution passes
//! to the whole document buffer. There is no syntax tree: each pass assumes
//! the earlier ones have already consumed their syntax, and a final cleanup
//! pass undoes paragraph wrapping around block elements.
//!
//! Supported constructs: `#`/`##`/`###` headings, `---` rules, fenced and
//! inline code, `**bold**`, `*italic*`, images, pipe tables, `-`/`*` and
//! numbered lists. Text is not HTML-escaped outside code blocks.

mod code;
mod converter;
mod front_matter;
mod headings;
mod inline;
mod list;
mod paragraph;
mod table;

pub use converter::MarkdownConverter;
pub use front_matter::{DEFAULT_ABSTRACT, DEFAULT_DATE, FrontMatter};
