//! Reference rule registry and bottom-up conversion driver.
//!
//! Production embedders normally hand [`crate::register_table_rules`] to
//! their own engine; this module provides a minimal host so the rules
//! can also run standalone over any [`DomNode`] tree.

use crate::dom::{DomNode, NodeKind};
use crate::rules::{Rule, RuleRegistry};

/// Name-keyed rule collection with last-registration-wins semantics,
/// both for names and for tag dispatch.
pub struct Ruleset<N: DomNode> {
    rules: Vec<(String, Rule<N>)>,
}

impl<N: DomNode> Ruleset<N> {
    /// Create an empty ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Most recently registered rule matching a lowercase tag name.
    #[must_use]
    pub fn rule_for(&self, tag: &str) -> Option<&Rule<N>> {
        self.rules
            .iter()
            .rev()
            .map(|(_, rule)| rule)
            .find(|rule| rule.filter.iter().any(|t| *t == tag))
    }
}

impl<N: DomNode> Default for Ruleset<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: DomNode> RuleRegistry<N> for Ruleset<N> {
    fn add_rule(&mut self, name: &str, rule: Rule<N>) {
        self.rules.retain(|(existing, _)| existing != name);
        self.rules.push((name.to_string(), rule));
    }
}

/// Convert a DOM subtree to Markdown, bottom-up.
///
/// Children are rendered before their parent and the concatenation is
/// handed to the parent's rule as its content. Text nodes yield their
/// text, except whitespace-only text between elements, which is dropped
/// the way host engines collapse it before rule dispatch. Elements
/// without a matching rule pass their content through unchanged.
#[must_use]
pub fn convert<N: DomNode>(node: &N, rules: &Ruleset<N>) -> String {
    match node.kind() {
        NodeKind::Text => node.text_content(),
        NodeKind::Document => render_children(node, rules),
        NodeKind::Element => {
            let content = render_children(node, rules);
            match node.tag().and_then(|tag| rules.rule_for(&tag)) {
                Some(rule) => (rule.replacement)(&content, node),
                None => content,
            }
        }
        NodeKind::Other => String::new(),
    }
}

fn render_children<N: DomNode>(node: &N, rules: &Ruleset<N>) -> String {
    let mut out = String::new();
    for child in node.children() {
        if child.kind() == NodeKind::Text && child.text_content().trim().is_empty() {
            continue;
        }
        out.push_str(&convert(&child, rules));
    }
    out
}
