//! Minimal DOM capability surface consumed by the table rules.
//!
//! The rules never construct or mutate DOM nodes; they only read
//! structure, attributes, and text. Anything that can answer those
//! queries can drive the rules, so the surface is defined as a trait
//! rather than a concrete tree: the [`crate::rcdom`] adapter satisfies
//! it for `markup5ever_rcdom`, and test fixtures can implement it with a
//! handful of lines.

/// Coarse node classification, mirroring the DOM `nodeType` values the
/// rules care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The document root.
    Document,
    /// An element node (`nodeType == 1`).
    Element,
    /// A text node (`nodeType == 3`).
    Text,
    /// Anything else (comments, doctypes, processing instructions).
    Other,
}

/// Read-only handle to a node in a caller-owned DOM tree.
///
/// Handles are cheap to clone (reference-counted in practice). The
/// provided methods implement the ancestor and row lookups the rules
/// need so adapters only supply the primitives.
pub trait DomNode: Clone {
    /// Classify the node.
    fn kind(&self) -> NodeKind;

    /// Lowercase tag name for element nodes, `None` otherwise.
    fn tag(&self) -> Option<String>;

    /// Child nodes in document order.
    fn children(&self) -> Vec<Self>;

    /// Parent node, if the node is attached to one.
    fn parent(&self) -> Option<Self>;

    /// Value of the named attribute on an element node.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Concatenated text of the node and its descendants.
    fn text_content(&self) -> String;

    /// Whether `self` and `other` are handles to the same node.
    fn same_node(&self, other: &Self) -> bool;

    /// Child nodes that are elements, in document order.
    fn element_children(&self) -> Vec<Self> {
        self.children()
            .into_iter()
            .filter(|c| c.kind() == NodeKind::Element)
            .collect()
    }

    /// Nearest ancestor (including `self`) with the given tag name.
    fn closest(&self, tag: &str) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node.tag().as_deref() == Some(tag) {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }

    /// Logical rows of a table node: direct `tr` children plus `tr`
    /// children of `thead`/`tbody`/`tfoot` sections. Rows of nested
    /// tables are never included.
    fn rows(&self) -> Vec<Self> {
        let mut rows = Vec::new();
        for child in self.element_children() {
            match child.tag().as_deref() {
                Some("tr") => rows.push(child),
                Some("thead" | "tbody" | "tfoot") => rows.extend(
                    child
                        .element_children()
                        .into_iter()
                        .filter(|n| n.tag().as_deref() == Some("tr")),
                ),
                _ => {}
            }
        }
        rows
    }
}
