//! Rules for converting HTML tables into GitHub-Flavoured-Markdown pipe
//! tables.
//!
//! The crate plugs into a generic bottom-up HTML-to-Markdown rewriting
//! engine: each rule receives the already-converted Markdown text of a DOM
//! node's children together with the node itself, and returns replacement
//! Markdown. Malformed markup never aborts conversion; degenerate tables
//! render as an empty string and everything else renders best-effort.
//!
//! [`register_table_rules`] installs the rule set into any
//! [`RuleRegistry`]. The bundled [`Ruleset`] registry and [`convert`]
//! driver let the rules run standalone over a [`DomNode`] tree, such as
//! one produced by [`parse_html`].

mod macros;

pub mod cell;
pub mod dom;
pub mod engine;
pub mod rcdom;
pub mod row;
pub mod rules;
pub mod table;

pub use cell::{render_cell, sanitize_cell};
pub use dom::{DomNode, NodeKind};
pub use engine::{Ruleset, convert};
pub use rcdom::{RcNode, parse_html};
pub use row::{is_heading_row, render_row};
pub use rules::{Rule, RuleRegistry, register_table_rules, table_rules};
pub use table::{column_count, is_separator_row, render_table, should_skip_table};
