//! Replacement of diagram fences with pre-rendered figure references.
//!
//! Diagrams are not rendered here. Each diagram fence is swapped for a
//! `<figure>` that points at `diagramN.png` inside the configured image
//! directory, where N is the position of the diagram in the document.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::language::DiagramLanguage;

/// Opening fence with an info string, body, and the next closing fence.
static FENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```([\w-]+)\n[\s\S]*?```").unwrap());

/// Default directory holding the pre-rendered diagram images.
pub const DEFAULT_IMAGE_DIR: &str = "diagrams";

/// Result of a replacement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    /// Markdown with diagram fences replaced by figures.
    pub markdown: String,
    /// Number of diagrams replaced.
    pub count: usize,
}

/// Replaces diagram fences with numbered figure references.
///
/// The counter lives inside a single [`replace`](Self::replace) call, so
/// every call numbers its diagrams from 1.
///
/// # Example
///
/// ```
/// use mdreport_diagrams::DiagramReplacer;
///
/// let replacer = DiagramReplacer::new();
/// let replaced = replacer.replace("```mermaid\ngraph TD\n```");
///
/// assert_eq!(replaced.count, 1);
/// assert!(replaced.markdown.contains("diagrams/diagram1.png"));
/// ```
#[derive(Debug, Clone)]
pub struct DiagramReplacer {
    languages: Vec<DiagramLanguage>,
    image_dir: String,
}

impl Default for DiagramReplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramReplacer {
    /// Create a replacer for Mermaid fences with images under `diagrams/`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: vec![DiagramLanguage::Mermaid],
            image_dir: DEFAULT_IMAGE_DIR.to_owned(),
        }
    }

    /// Set the diagram languages whose fences are replaced.
    #[must_use]
    pub fn languages(mut self, languages: Vec<DiagramLanguage>) -> Self {
        self.languages = languages;
        self
    }

    /// Set the directory the figure image paths point into.
    ///
    /// An empty directory yields bare `diagramN.png` paths.
    #[must_use]
    pub fn image_dir(mut self, image_dir: impl Into<String>) -> Self {
        self.image_dir = image_dir.into();
        self
    }

    /// Replace every diagram fence in `markdown`, in document order.
    #[must_use]
    pub fn replace(&self, markdown: &str) -> Replaced {
        let mut count = 0;

        let replaced = FENCE_PATTERN.replace_all(markdown, |caps: &Captures<'_>| {
            let tag = &caps[1];
            if !self.is_diagram(tag) {
                return caps[0].to_owned();
            }
            count += 1;
            self.figure(count)
        });

        tracing::debug!(count, "Replaced diagram fences");

        Replaced {
            markdown: replaced.into_owned(),
            count,
        }
    }

    fn is_diagram(&self, tag: &str) -> bool {
        DiagramLanguage::parse(tag).is_some_and(|lang| self.languages.contains(&lang))
    }

    fn figure(&self, n: usize) -> String {
        let mut src = String::new();
        if !self.image_dir.is_empty() {
            src.push_str(self.image_dir.trim_end_matches('/'));
            src.push('/');
        }
        let _ = write!(src, "diagram{n}.png");

        format!(
            "<figure>\n<img src=\"{src}\" alt=\"Diagram {n}\">\n<figcaption>Figure {n}</figcaption>\n</figure>"
        )
    }
}
