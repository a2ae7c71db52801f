//! Graphviz DOT rendering for caller-defined graphs.
//!
//! This module turns an explicit, ordered node list plus an edge lookup closure into DOT code
//! that can be fed unmodified to Graphviz (`dot -Tsvg`, `xdot`, ...).
//!
//! # Output layout
//!
//! ```text
//! digraph <name> {
//!   <prelude, trimmed and indented>
//!   0 <attrs of nodes[0]>
//!   1 <attrs of nodes[1]>
//!   ...
//!   0 -> {<target ids>}
//!   ...
//! }
//! ```
//!
//! Node identifiers are the 0-based positions in the node list. Edges whose target is not part
//! of the node list are dropped, which makes it cheap to render a slice of a larger graph, e.g.
//! the result of [`reachable`](fn@crate::graph::reachable). Rendering is deterministic: the same
//! inputs always produce the same bytes.
//!
//! # Escaping
//!
//! Graph names, prelude code and attribute strings are emitted verbatim. Use [`escape_dot`],
//! [`quote_dot`] or [`label_attrs`] inside the attribute callback when labels may contain
//! characters with special meaning in DOT.

use std::{collections::HashMap, fmt::Write as _, hash::Hash, io};

use crate::{
    utils::{indent, SeqExt},
    Result,
};

/// Indentation unit for everything inside the `digraph { ... }` block.
const INDENT: &str = "  ";

/// Settings for rendering a graph as DOT code.
///
/// # Examples
///
/// ```rust
/// use xykit::graph::DotConfig;
///
/// let config = DotConfig::new("deps").with_prelude("rankdir=LR");
/// let nodes = ["app", "lib"];
/// let dot = config.render(&nodes, |n| if *n == "app" { vec!["lib"] } else { vec![] }, |_| String::new());
///
/// assert_eq!(
///     String::from_utf8(dot).unwrap(),
///     "digraph deps {\n  rankdir=LR\n  0\n  1\n  0 -> {1}\n}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotConfig {
    /// Identifier placed after `digraph`. Emitted verbatim.
    pub name: String,
    /// Free-form DOT statements placed before the node list (graph/node/edge defaults).
    ///
    /// Leading and trailing whitespace is trimmed and every line is indented one level.
    /// Nothing is emitted if the trimmed prelude is empty.
    pub prelude: String,
}

impl Default for DotConfig {
    fn default() -> Self {
        DotConfig {
            name: "G".to_string(),
            prelude: String::new(),
        }
    }
}

impl DotConfig {
    /// Creates a configuration for a graph called `name` with an empty prelude.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        DotConfig {
            name: name.into(),
            prelude: String::new(),
        }
    }

    /// Replaces the prelude code.
    #[must_use]
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = prelude.into();
        self
    }

    /// Renders `nodes` and their edges as DOT code.
    ///
    /// # Arguments
    ///
    /// * `nodes` - All nodes to include, in output order. A node's ID is its position; if a
    ///   key occurs more than once, its last position is used as the edge target ID
    /// * `edges` - Returns the outgoing edge targets of a node. Called exactly once per entry
    ///   of `nodes`, in list order. Targets missing from `nodes` are dropped
    /// * `node_attrs` - Returns the attribute list of a node including the brackets, e.g.
    ///   `[label="A"]`. An empty string emits the bare node ID
    ///
    /// # Returns
    ///
    /// The UTF-8 encoded DOT code, terminated by a newline.
    pub fn render<K, I, F, A>(&self, nodes: &[K], mut edges: F, mut node_attrs: A) -> Vec<u8>
    where
        K: Eq + Hash,
        I: IntoIterator<Item = K>,
        F: FnMut(&K) -> I,
        A: FnMut(&K) -> String,
    {
        let mut dot = String::new();
        let _ = writeln!(dot, "digraph {} {{", self.name);

        let prelude = indent(self.prelude.trim(), INDENT, 1);
        if !prelude.is_empty() {
            dot.push_str(&prelude);
            dot.push('\n');
        }

        let mut ids: HashMap<&K, usize> = HashMap::with_capacity(nodes.len());
        for (id, key) in nodes.iter().enumerate() {
            let attrs = node_attrs(key);
            if attrs.is_empty() {
                let _ = writeln!(dot, "{INDENT}{id}");
            } else {
                let _ = writeln!(dot, "{INDENT}{id} {attrs}");
            }
            ids.insert(key, id);
        }

        let mut edge_count = 0usize;
        let mut dropped = 0usize;
        for (id, key) in nodes.iter().enumerate() {
            let mut targets = Vec::new();
            for target in edges(key) {
                match ids.get(&target) {
                    Some(&target_id) => targets.push(target_id),
                    None => dropped += 1,
                }
            }
            if targets.is_empty() {
                continue;
            }
            edge_count += targets.len();
            let _ = writeln!(dot, "{INDENT}{id} -> {{{}}}", targets.iter().join(" "));
        }

        dot.push_str("}\n");

        log::debug!(
            "rendered DOT graph `{}`: {} nodes, {} edges ({} dropped)",
            self.name,
            nodes.len(),
            edge_count,
            dropped
        );

        dot.into_bytes()
    }

    /// Renders the graph like [`DotConfig::render`] and writes it to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if writing to `writer` fails.
    pub fn write_to<W, K, I, F, A>(
        &self,
        writer: &mut W,
        nodes: &[K],
        edges: F,
        node_attrs: A,
    ) -> Result<()>
    where
        W: io::Write,
        K: Eq + Hash,
        I: IntoIterator<Item = K>,
        F: FnMut(&K) -> I,
        A: FnMut(&K) -> String,
    {
        writer.write_all(&self.render(nodes, edges, node_attrs))?;
        writer.flush()?;
        Ok(())
    }
}

/// Generates Graphviz DOT code to visualize a graph.
///
/// Shorthand for `DotConfig::new(name).with_prelude(prelude).render(nodes, edges, node_attrs)`;
/// see [`DotConfig::render`] for the exact contract.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use xykit::graph::{dot_code, label_attrs};
///
/// let graph = HashMap::from([("A", vec!["B"]), ("B", vec!["A", "C"])]);
/// let code = dot_code(
///     &["A", "B"],
///     |k| graph.get(k).cloned().unwrap_or_default(),
///     "pair",
///     "node[shape=box]",
///     |k| label_attrs(k),
/// );
///
/// assert_eq!(
///     String::from_utf8(code).unwrap(),
///     "digraph pair {\n  node[shape=box]\n  0 [label=\"A\"]\n  1 [label=\"B\"]\n  0 -> {1}\n  1 -> {0}\n}\n"
/// );
/// ```
pub fn dot_code<K, I, F, A>(
    nodes: &[K],
    edges: F,
    name: &str,
    prelude: &str,
    node_attrs: A,
) -> Vec<u8>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
    F: FnMut(&K) -> I,
    A: FnMut(&K) -> String,
{
    DotConfig::new(name)
        .with_prelude(prelude)
        .render(nodes, edges, node_attrs)
}

/// Escapes a string for safe use in DOT format labels and identifiers.
///
/// This function handles all characters that have special meaning in DOT format,
/// including quotes, backslashes, newlines, and angle brackets.
///
/// # Examples
///
/// ```rust
/// use xykit::graph::escape_dot;
///
/// assert_eq!(escape_dot("Map<K, V>"), "Map\\<K, V\\>");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

/// Escapes `s` with [`escape_dot`] and wraps it in double quotes.
#[must_use]
pub fn quote_dot(s: &str) -> String {
    format!("\"{}\"", escape_dot(s))
}

/// Builds a `[label="..."]` attribute list for a node.
///
/// # Examples
///
/// ```rust
/// use xykit::graph::label_attrs;
///
/// assert_eq!(label_attrs("say \"hi\""), "[label=\"say \\\"hi\\\"\"]");
/// ```
#[must_use]
pub fn label_attrs(label: &str) -> String {
    format!("[label={}]", quote_dot(label))
}
