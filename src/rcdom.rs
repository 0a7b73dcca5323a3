//! [`DomNode`] adapter for `markup5ever_rcdom` trees.
//!
//! [`parse_html`] parses markup with `html5ever` and hands back the
//! document root as an [`RcNode`], ready to feed to
//! [`crate::engine::convert`]. The adapter is read-only; the underlying
//! tree is never mutated.

use std::rc::{Rc, Weak};

use html5ever::driver::ParseOpts;
use html5ever::{parse_document, tendril::TendrilSink};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::dom::{DomNode, NodeKind};

/// Reference-counted handle to an `rcdom` node.
///
/// `rcdom` parents are weak references, so a bare `Handle` loses its
/// ancestors once the rest of the tree is dropped. Every `RcNode`
/// therefore carries a strong reference to the root it was reached
/// from: any retained node keeps the whole tree alive, and parent
/// lookups keep working however long the node outlives the binding it
/// came from.
#[derive(Clone)]
pub struct RcNode {
    handle: Handle,
    root: Handle,
}

impl RcNode {
    /// Wrap an existing `rcdom` handle.
    ///
    /// The handle itself becomes the pinned root, so ancestors above it
    /// stay reachable only while the caller keeps them alive elsewhere.
    /// Nodes obtained through [`parse_html`] or traversal pin the full
    /// document instead.
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self {
            root: handle.clone(),
            handle,
        }
    }

    /// Borrow the underlying handle.
    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    fn adopt(&self, handle: Handle) -> Self {
        Self {
            handle,
            root: self.root.clone(),
        }
    }
}

fn collect_text(handle: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &handle.data {
        out.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        collect_text(child, out);
    }
}

impl DomNode for RcNode {
    fn kind(&self) -> NodeKind {
        match &self.handle.data {
            NodeData::Document => NodeKind::Document,
            NodeData::Element { .. } => NodeKind::Element,
            NodeData::Text { .. } => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn tag(&self) -> Option<String> {
        match &self.handle.data {
            NodeData::Element { name, .. } => Some(name.local.as_ref().to_ascii_lowercase()),
            _ => None,
        }
    }

    fn children(&self) -> Vec<Self> {
        self.handle
            .children
            .borrow()
            .iter()
            .map(|child| self.adopt(child.clone()))
            .collect()
    }

    fn parent(&self) -> Option<Self> {
        // `parent` lives in a `Cell`, so take it out and put it back.
        let weak = self.handle.parent.take();
        let parent = weak
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|handle| self.adopt(handle));
        self.handle.parent.set(weak);
        parent
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match &self.handle.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|a| a.name.local.as_ref().eq_ignore_ascii_case(name))
                .map(|a| a.value.to_string()),
            _ => None,
        }
    }

    fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.handle, &mut out);
        out
    }

    fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.handle, &other.handle)
    }
}

/// Parse an HTML document and return its root node.
///
/// Fragments are accepted as well: `html5ever` wraps them in the usual
/// `html`/`body` scaffolding, which the conversion driver passes through
/// untouched. Every node reached from the result pins the document, so
/// subtree handles stay fully navigable after the root binding is gone.
#[must_use]
pub fn parse_html(html: &str) -> RcNode {
    let dom: RcDom = parse_document(RcDom::default(), ParseOpts::default()).one(html.to_string());
    RcNode::new(dom.document.clone())
}
