//! Utility helpers shared across integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gfm_tables::{DomNode, NodeKind, Ruleset, convert, parse_html, register_table_rules};

/// Build a `Vec<String>` from a list of string slices.
#[allow(unused_macros)]
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Convert an HTML string with a freshly registered table rule set.
pub fn convert_html(html: &str) -> String {
    let mut rules = Ruleset::new();
    register_table_rules(&mut rules);
    convert(&parse_html(html), &rules)
}

/// Trimmed output lines, for comparing rendered tables.
pub fn table_lines(output: &str) -> Vec<String> {
    output.trim().lines().map(str::to_string).collect()
}

/// First descendant (including `node`) with the given tag name.
pub fn find<N: DomNode>(node: &N, tag: &str) -> Option<N> {
    if node.tag().as_deref() == Some(tag) {
        return Some(node.clone());
    }
    node.children().iter().find_map(|c| find(c, tag))
}

/// All descendants (including `node`) with the given tag name, in
/// document order.
pub fn find_all<N: DomNode>(node: &N, tag: &str) -> Vec<N> {
    let mut out = Vec::new();
    collect(node, tag, &mut out);
    out
}

fn collect<N: DomNode>(node: &N, tag: &str, out: &mut Vec<N>) {
    if node.tag().as_deref() == Some(tag) {
        out.push(node.clone());
    }
    for child in node.children() {
        collect(&child, tag, out);
    }
}

struct FakeData {
    kind: NodeKind,
    tag: Option<String>,
    attrs: Vec<(String, String)>,
    text: String,
    children: RefCell<Vec<FakeNode>>,
    parent: RefCell<Option<Weak<FakeData>>>,
}

/// Hand-built DOM node proving the [`DomNode`] contract is trivial to
/// satisfy without a parser.
#[derive(Clone)]
pub struct FakeNode(Rc<FakeData>);

impl FakeNode {
    pub fn element(tag: &str) -> Self {
        Self::element_with(tag, &[])
    }

    pub fn element_with(tag: &str, attrs: &[(&str, &str)]) -> Self {
        Self(Rc::new(FakeData {
            kind: NodeKind::Element,
            tag: Some(tag.to_string()),
            attrs: attrs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            text: String::new(),
            children: RefCell::new(Vec::new()),
            parent: RefCell::new(None),
        }))
    }

    pub fn text(text: &str) -> Self {
        Self(Rc::new(FakeData {
            kind: NodeKind::Text,
            tag: None,
            attrs: Vec::new(),
            text: text.to_string(),
            children: RefCell::new(Vec::new()),
            parent: RefCell::new(None),
        }))
    }

    /// Attach `child` and return it for chaining.
    pub fn append(&self, child: &FakeNode) -> FakeNode {
        *child.0.parent.borrow_mut() = Some(Rc::downgrade(&self.0));
        self.0.children.borrow_mut().push(child.clone());
        child.clone()
    }
}

impl DomNode for FakeNode {
    fn kind(&self) -> NodeKind {
        self.0.kind
    }

    fn tag(&self) -> Option<String> {
        self.0.tag.clone()
    }

    fn children(&self) -> Vec<Self> {
        self.0.children.borrow().clone()
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent.borrow().as_ref().and_then(Weak::upgrade).map(Self)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn text_content(&self) -> String {
        let mut out = self.0.text.clone();
        for child in self.children() {
            out.push_str(&child.text_content());
        }
        out
    }

    fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
