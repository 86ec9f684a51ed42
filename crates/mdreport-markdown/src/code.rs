//! Fenced code block and inline code passes.
//!
//! Fenced blocks are converted first and set aside behind placeholders, so
//! the inline and block passes that follow never see code block bodies.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static FENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\w*\n([\s\S]*?)```").unwrap());
static INLINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{1A}(\\d+)\u{1A}").unwrap());

/// Placeholder delimiter. Not whitespace, and no pass matches it.
const PLACEHOLDER_MARK: char = '\u{1A}';

/// Rendered `<pre><code>` blocks held out of the document buffer.
#[derive(Debug, Default)]
pub(crate) struct CodeBlocks {
    blocks: Vec<String>,
}

impl CodeBlocks {
    /// Put the rendered blocks back in place of their placeholders.
    pub(crate) fn restore(&self, text: &str) -> String {
        if self.blocks.is_empty() {
            return text.to_owned();
        }
        PLACEHOLDER_PATTERN
            .replace_all(text, |caps: &Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.blocks.get(index))
                    .map_or_else(|| caps[0].to_owned(), Clone::clone)
            })
            .into_owned()
    }
}

/// Convert fenced blocks to `<pre><code>`, escaping angle brackets, and
/// replace each with a placeholder until [`CodeBlocks::restore`].
pub(crate) fn stash_fenced_blocks(text: &str) -> (String, CodeBlocks) {
    let mut code_blocks = CodeBlocks::default();
    let stashed = FENCE_PATTERN
        .replace_all(text, |caps: &Captures<'_>| {
            let index = code_blocks.blocks.len();
            code_blocks.blocks.push(format!(
                "<pre><code>{}</code></pre>",
                escape_angle_brackets(&caps[1])
            ));
            format!("{PLACEHOLDER_MARK}{index}{PLACEHOLDER_MARK}")
        })
        .into_owned();
    (stashed, code_blocks)
}

/// Convert single-backtick spans to `<code>`.
pub(crate) fn inline_code(text: &str) -> String {
    INLINE_PATTERN
        .replace_all(text, "<code>${1}</code>")
        .into_owned()
}

/// Escape `<` and `>` only. Ampersands pass through unchanged.
fn escape_angle_brackets(code: &str) -> String {
    code.replace('<', "&lt;").replace('>', "&gt;")
}
