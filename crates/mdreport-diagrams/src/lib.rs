//! Diagram fence replacement for mdreport.
//!
//! Diagram code blocks (Mermaid by default) are replaced with `<figure>`
//! references to pre-rendered PNG files. Numbering follows document order
//! and restarts for every replacement run.
//!
//! - [`language`]: recognised diagram languages (`DiagramLanguage`)
//! - [`replacer`]: `DiagramReplacer` and its `Replaced` result

mod language;
mod replacer;

pub use language::DiagramLanguage;
pub use replacer::{DEFAULT_IMAGE_DIR, DiagramReplacer, Replaced};
