//! Cell sanitization and rendering.
//!
//! A cell's rendered child content arrives as arbitrary Markdown text,
//! possibly empty or spanning several lines. Sanitization flattens it
//! into a single pipe-safe segment; rendering then delimits the segment
//! and pads the grid for `colspan`.

use crate::dom::{DomNode, NodeKind};

/// Placeholder for cells with no visible content, also the minimum cell
/// width so short cells still delimit visually against the pipes.
const EMPTY_CELL: &str = "   ";
const MIN_WIDTH: usize = 3;

/// Normalize raw cell content into a pipe-table-safe segment.
///
/// Trims, collapses whitespace runs (including newlines and carriage
/// returns) to single spaces, escapes `\` as `\\` and `|` as `\|`, and
/// right-pads to at least three characters. Empty or whitespace-only
/// input yields exactly three spaces.
///
/// Escaping is a single left-to-right pass over the original characters,
/// so backslashes introduced by pipe escaping are never escaped again.
#[must_use]
pub fn sanitize_cell(content: &str) -> String {
    let mut out = String::with_capacity(content.len().max(MIN_WIDTH));
    let mut pending_space = false;
    for ch in content.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        match ch {
            '\\' => out.push_str("\\\\"),
            '|' => out.push_str("\\|"),
            _ => out.push(ch),
        }
    }

    if out.is_empty() {
        return EMPTY_CELL.to_string();
    }
    let width = out.chars().count();
    for _ in width..MIN_WIDTH {
        out.push(' ');
    }
    out
}

/// Effective colspan of a cell: a parsed integer of at least 1, with
/// missing, invalid, and non-positive values all normalized to 1.
pub(crate) fn colspan<N: DomNode>(node: &N) -> usize {
    node.attribute("colspan")
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map_or(1, |n| usize::try_from(n).unwrap_or(1).max(1))
}

/// Position of `node` among its parent's element children.
///
/// Text nodes cannot be cells, so they do not shift the index. Detached
/// or unlocatable nodes fall back to index 0.
fn sibling_index<N: DomNode>(node: &N) -> usize {
    let Some(parent) = node.parent() else {
        return 0;
    };
    parent
        .children()
        .into_iter()
        .filter(|c| c.kind() == NodeKind::Element)
        .position(|c| c.same_node(node))
        .unwrap_or(0)
}

/// Render one table cell as pipe-delimited Markdown.
///
/// The first cell of a row is prefixed with `"| "`, every later cell
/// with a single space, and each real segment is suffixed with `" |"`.
/// A cell spanning `n` columns appends `n - 1` empty `"   |"` padding
/// segments directly after the real one; padding never re-runs
/// sanitization.
///
/// Pass the cell's index among its siblings when it is already known;
/// `None` triggers the sibling-scan fallback.
#[must_use]
pub fn render_cell<N: DomNode>(content: &str, node: &N, index: Option<usize>) -> String {
    let index = index.unwrap_or_else(|| sibling_index(node));
    let prefix = if index == 0 { "| " } else { " " };

    let mut out = String::new();
    out.push_str(prefix);
    out.push_str(&sanitize_cell(content));
    out.push_str(" |");
    for _ in 1..colspan(node) {
        out.push_str("   |");
    }
    out
}
