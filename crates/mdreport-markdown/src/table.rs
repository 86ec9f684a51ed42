//! Pipe table pass.
//!
//! A run of consecutive `|...|` lines is one table. There is no column
//! alignment support and cells are not re-parsed.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Consecutive lines ending in a pipe. The final row may end the document
/// without a trailing newline.
static TABLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\|.+\|(?:\n|\z))+").unwrap());

/// Convert pipe tables to `<table>` elements.
pub(crate) fn tables(text: &str) -> String {
    TABLE_PATTERN
        .replace_all(text, |caps: &Captures<'_>| format_table(&caps[0]))
        .into_owned()
}

/// Format one table block.
///
/// Separator rows are skipped; the first remaining row becomes the header.
fn format_table(block: &str) -> String {
    let mut html = String::from("<table>\n");
    let mut header_written = false;

    for line in block.trim().split('\n') {
        if is_separator_row(line) {
            continue;
        }
        let tag = if header_written { "td" } else { "th" };
        header_written = true;

        html.push_str("<tr>");
        for cell in row_cells(line) {
            let _ = write!(html, "<{tag}>{cell}</{tag}>");
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>");
    html
}

/// Split a row on pipes, dropping the fields outside the boundary pipes.
fn row_cells(line: &str) -> Vec<&str> {
    let fields: Vec<&str> = line.split('|').collect();
    fields
        .get(1..fields.len().saturating_sub(1))
        .unwrap_or_default()
        .iter()
        .map(|cell| cell.trim())
        .collect()
}

/// A row made only of pipes, dashes, alignment colons and spaces.
fn is_separator_row(line: &str) -> bool {
    line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_separator_and_data_row() {
        let html = tables("| Name | Role |\n|------|------|\n| Ada | Eng |\n");
        assert_eq!(
            html,
            "<table>\n<tr><th>Name</th><th>Role</th></tr>\n<tr><td>Ada</td><td>Eng</td></tr>\n</table>"
        );
    }

    #[test]
    fn test_table_at_end_without_newline() {
        let html = tables("| A |\n|---|\n| 1 |");
        assert_eq!(
            html,
            "<table>\n<tr><th>A</th></tr>\n<tr><td>1</td></tr>\n</table>"
        );
    }

    #[test]
    fn test_alignment_separator_dropped() {
        let html = tables("| A | B |\n|:---|---:|\n| 1 | 2 |\n");
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(!html.contains("---"));
    }

    #[test]
    fn test_surrounding_text_kept() {
        let html = tables("Before\n| A |\n|---|\n| 1 |\n\nAfter");
        assert_eq!(
            html,
            "Before\n<table>\n<tr><th>A</th></tr>\n<tr><td>1</td></tr>\n</table>\nAfter"
        );
    }

    #[test]
    fn test_two_tables() {
        let html = tables("| A |\n|---|\n| 1 |\n\n| B |\n|---|\n| 2 |\n");
        assert_eq!(html.matches("<table>").count(), 2);
    }

    #[test]
    fn test_empty_cells_preserved() {
        assert_eq!(row_cells("| a |  | c |"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_row_cells_single_field() {
        assert!(row_cells("no pipes").is_empty());
    }

    #[test]
    fn test_separator_detection() {
        assert!(is_separator_row("|---|---|"));
        assert!(is_separator_row("| :-- | --: |"));
        assert!(!is_separator_row("| a | b |"));
        assert!(!is_separator_row("| | |"));
    }

    #[test]
    fn test_single_pipe_line_is_not_table() {
        assert_eq!(tables("a | b\n"), "a | b\n");
    }
}
