//! Directed-graph helpers for caller-defined graphs.
//!
//! Nothing in this module owns graph storage. The caller's data structure *is* the graph; it is
//! accessed only through an edge lookup closure that maps a node key to its outgoing targets.
//! Node keys can be any `Eq + Hash` value: names, indices, handles, or small structs.
//!
//! # Available Operations
//!
//! - [`reachable`](fn@reachable) - Every node reachable from a set of roots
//! - [`reachable_from_map`] - [`reachable`](fn@reachable) over a `HashMap<K, Vec<K>>` adjacency map
//! - [`dot_code`] / [`DotConfig`] - Render a node list and its edges as Graphviz DOT code
//!
//! # Examples
//!
//! Render only the part of a graph that is reachable from a root:
//!
//! ```rust
//! use std::collections::HashMap;
//! use xykit::graph::{dot_code, label_attrs, reachable};
//!
//! let graph = HashMap::from([
//!     ("main", vec!["parse", "run"]),
//!     ("parse", vec!["lex"]),
//!     ("run", vec![]),
//!     ("lex", vec![]),
//!     ("unused", vec!["lex"]),
//! ]);
//! let edges = |k: &&'static str| graph[k].clone();
//!
//! let live = reachable(["main"], edges);
//! let mut nodes: Vec<&str> = live.into_iter().collect();
//! nodes.sort_unstable();
//!
//! let code = String::from_utf8(dot_code(&nodes, edges, "calls", "", |k| label_attrs(k))).unwrap();
//! assert!(code.contains("[label=\"lex\"]"));
//! assert!(!code.contains("unused"));
//! ```

mod dot;
mod reachable;

pub use dot::{dot_code, escape_dot, label_attrs, quote_dot, DotConfig};
pub use reachable::{reachable, reachable_from_map};
