//! Table-level structure: column counting, separator handling, the
//! degenerate-table filter, and final assembly of the rendered block.

use std::sync::LazyLock;

use regex::Regex;

use crate::dom::DomNode;
use crate::lazy_regex;

/// One inner cell of a GFM separator row: optional spaces, an optional
/// leading colon, three or more dashes, an optional trailing colon,
/// optional spaces.
static SEPARATOR_CELL_RE: LazyLock<Regex> = lazy_regex!(r"^ *:?-{3,}:? *$", "separator cell");

fn is_cell<N: DomNode>(node: &N) -> bool {
    matches!(node.tag().as_deref(), Some("td" | "th"))
}

fn row_colspan_sum<N: DomNode>(row: &N) -> usize {
    row.element_children()
        .iter()
        .filter(|c| is_cell(*c))
        .map(crate::cell::colspan)
        .sum()
}

/// Effective column count of a table: the maximum colspan sum over all
/// of its rows. Header and body rows may disagree, so every row is
/// consulted, not just the first. Returns 0 for a table with no rows or
/// no cells; callers treat 0 as "cannot synthesize a separator".
#[must_use]
pub fn column_count<N: DomNode>(table: &N) -> usize {
    table
        .rows()
        .iter()
        .map(row_colspan_sum)
        .max()
        .unwrap_or(0)
}

/// Recognize an already-rendered GFM separator line such as
/// `| --- |:---:|`.
///
/// The trimmed line must start and end with a pipe and every inner cell
/// must be a valid separator cell; one bad cell fails the whole row.
#[must_use]
pub fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    if !trimmed.starts_with('|') || !trimmed.ends_with('|') {
        return false;
    }
    let parts: Vec<&str> = trimmed.split('|').collect();
    // Drop the empty boundary fragments produced by the outer pipes.
    let inner = &parts[1..parts.len() - 1];
    !inner.is_empty() && inner.iter().all(|cell| SEPARATOR_CELL_RE.is_match(cell))
}

/// Decide whether a table is too degenerate to render.
///
/// Tables with no rows, no cells, or exactly one cell with no visible
/// text are dropped entirely. A single cell with real content, or two or
/// more cells however empty, still renders.
#[must_use]
pub fn should_skip_table<N: DomNode>(table: &N) -> bool {
    let mut total_cells = 0usize;
    let mut content_cells = 0usize;
    for row in table.rows() {
        for cell in row.element_children() {
            if is_cell(&cell) {
                total_cells += 1;
                if !cell.text_content().trim().is_empty() {
                    content_cells += 1;
                }
            }
        }
    }
    total_cells == 0 || (total_cells == 1 && content_cells == 0)
}

/// Build a synthesized separator line with `columns` plain `---` cells.
pub(crate) fn separator_line(columns: usize) -> String {
    let mut out = String::with_capacity(columns * 6 + 2);
    for i in 0..columns {
        out.push_str(if i == 0 { "| --- |" } else { " --- |" });
    }
    out
}

/// Replacement for `table` nodes: assemble the rendered row lines into a
/// complete pipe table.
///
/// Degenerate tables vanish (empty string, siblings unaffected). Blank
/// lines are dropped; if the second line is not already a separator, one
/// is synthesized from the table's [`column_count`] and inserted beneath
/// the first row. The result is wrapped in blank lines to read as a
/// block-level element.
#[must_use]
pub fn render_table<N: DomNode>(content: &str, node: &N) -> String {
    if should_skip_table(node) {
        return String::new();
    }

    let mut lines: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();
    if lines.is_empty() {
        return String::new();
    }

    let has_separator = lines.len() >= 2 && is_separator_row(&lines[1]);
    if !has_separator {
        let columns = column_count(node);
        if columns > 0 {
            lines.insert(1, separator_line(columns));
        }
    }

    format!("\n\n{}\n\n", lines.join("\n"))
}
