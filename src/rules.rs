//! Named rule specifications and their registration contract.
//!
//! The rule set is built by a pure constructor rather than kept in a
//! shared mutable map, so independent engine instances can register the
//! rules without cross-talk.

use crate::cell::render_cell;
use crate::dom::DomNode;
use crate::row::render_row;
use crate::table::render_table;

/// One node-replacement rule: the lowercase tag names it applies to and
/// the replacement function run once the node's children have been
/// converted.
pub struct Rule<N> {
    /// Lowercase HTML tag names this rule matches.
    pub filter: &'static [&'static str],
    /// Maps rendered child content and the DOM node to replacement
    /// Markdown.
    pub replacement: fn(&str, &N) -> String,
}

impl<N> Clone for Rule<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Rule<N> {}

/// Registration surface offered by a host rewriting engine.
///
/// Registering a second rule under an existing name must replace the
/// first, so repeated setup calls accumulate nothing.
pub trait RuleRegistry<N: DomNode> {
    /// Install or replace the rule stored under `name`.
    fn add_rule(&mut self, name: &str, rule: Rule<N>);
}

fn cell_replacement<N: DomNode>(content: &str, node: &N) -> String {
    render_cell(content, node, None)
}

fn row_replacement<N: DomNode>(content: &str, node: &N) -> String {
    render_row(content, node)
}

fn table_replacement<N: DomNode>(content: &str, node: &N) -> String {
    render_table(content, node)
}

fn passthrough_replacement<N: DomNode>(content: &str, _node: &N) -> String {
    content.to_string()
}

fn drop_replacement<N: DomNode>(_content: &str, _node: &N) -> String {
    String::new()
}

/// Build the complete set of named table rules.
///
/// `thead`/`tbody`/`tfoot` are structural and pass their content
/// through; `caption`/`colgroup`/`col` have no pipe-table counterpart
/// and are discarded outright.
#[must_use]
pub fn table_rules<N: DomNode>() -> [(&'static str, Rule<N>); 6] {
    [
        (
            "tableCell",
            Rule {
                filter: &["th", "td"],
                replacement: cell_replacement::<N>,
            },
        ),
        (
            "tableRow",
            Rule {
                filter: &["tr"],
                replacement: row_replacement::<N>,
            },
        ),
        (
            "table",
            Rule {
                filter: &["table"],
                replacement: table_replacement::<N>,
            },
        ),
        (
            "tableSection",
            Rule {
                filter: &["thead", "tbody", "tfoot"],
                replacement: passthrough_replacement::<N>,
            },
        ),
        (
            "tableCaption",
            Rule {
                filter: &["caption"],
                replacement: drop_replacement::<N>,
            },
        ),
        (
            "tableColgroup",
            Rule {
                filter: &["colgroup", "col"],
                replacement: drop_replacement::<N>,
            },
        ),
    ]
}

/// Register every table rule with `registry`.
///
/// Safe to call more than once on the same registry: each rule name is
/// simply re-registered and the last registration wins.
pub fn register_table_rules<N: DomNode, R: RuleRegistry<N>>(registry: &mut R) {
    for (name, rule) in table_rules() {
        registry.add_rule(name, rule);
    }
}
