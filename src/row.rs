//! Row classification and rendering.

use crate::dom::{DomNode, NodeKind};
use crate::table::{column_count, separator_line};

/// Structural header-row predicate.
///
/// A row is a header row iff its parent section is a `thead`, or it is
/// the first element child of a `table` or `tbody` and every one of its
/// element children is a `th`. Text nodes between cells are ignored;
/// rows with no element children, or no parent at all, are never header
/// rows. Cell content plays no part in the decision.
#[must_use]
pub fn is_heading_row<N: DomNode>(tr: &N) -> bool {
    let Some(parent) = tr.parent() else {
        return false;
    };
    match parent.tag().as_deref() {
        Some("thead") => true,
        Some("table" | "tbody") => {
            let first = parent
                .children()
                .into_iter()
                .find(|c| c.kind() == NodeKind::Element);
            if !first.is_some_and(|f| f.same_node(tr)) {
                return false;
            }
            let cells = tr.element_children();
            !cells.is_empty() && cells.iter().all(|c| c.tag().as_deref() == Some("th"))
        }
        _ => false,
    }
}

/// Replacement for `tr` nodes.
///
/// Rows whose rendered cell content is blank contribute nothing, which
/// drops rows hollowed out by malformed-HTML recovery. Otherwise the
/// content is emitted on its own line, and a header row additionally
/// gets a synthesized separator directly beneath it when its table has a
/// positive column count.
#[must_use]
pub fn render_row<N: DomNode>(content: &str, node: &N) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(content.len() + 1);
    out.push('\n');
    out.push_str(content);

    if is_heading_row(node) {
        if let Some(table) = node.closest("table") {
            let columns = column_count(&table);
            if columns > 0 {
                out.push('\n');
                out.push_str(&separator_line(columns));
            }
        }
    }
    out
}
