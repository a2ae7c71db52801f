// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # xykit
//!
//! Directed-graph reachability and Graphviz DOT rendering over caller-defined graphs, plus the
//! small text, set and iterator utilities they build on.
//!
//! ## Design
//!
//! The graph functions never own a graph. The caller's data structure is the graph, reached only
//! through an edge lookup closure `FnMut(&K) -> impl IntoIterator<Item = K>`. This keeps the
//! crate independent of any particular representation: adjacency maps, arenas, live object
//! graphs and computed edges all work the same way.
//!
//! All operations are synchronous, pure with respect to crate state, and reentrant; they may be
//! called from several threads at once as long as the supplied closures allow it.
//!
//! ## Modules
//!
//! - [`graph`] - Multi-root reachability and DOT serialization
//! - [`utils`] - Indentation, [`Set`](utils::Set), lazy sequence adapters, text assertions
//!
//! ## Quick start
//!
//! ```rust
//! use std::collections::HashMap;
//! use xykit::graph::{dot_code, label_attrs, reachable};
//!
//! let nodes: HashMap<&str, Vec<&str>> = HashMap::from([
//!     ("A", vec!["B", "C"]),
//!     ("B", vec!["D"]),
//!     ("C", vec![]),
//!     ("D", vec!["A"]),
//!     ("E", vec!["A", "B"]),
//! ]);
//!
//! let live = reachable(["A", "B"], |k| nodes[k].clone());
//! assert_eq!(live.sorted(), vec![&"A", &"B", &"C", &"D"]);
//!
//! let code = dot_code(
//!     &["A", "B", "D", "E"],
//!     |k| nodes[k].clone(),
//!     "my_graph",
//!     "node[shape=box, style=filled]",
//!     |k| label_attrs(k),
//! );
//! print!("{}", String::from_utf8(code).unwrap());
//! ```
//!
//! ## Logging
//!
//! The crate reports through the [`log`] facade (`trace` for traversal summaries, `debug` for
//! rendering summaries). No logger is installed; binaries choose their own.

#[macro_use]
pub(crate) mod macros;

pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// ```rust
/// use xykit::prelude::*;
///
/// let live: Set<u8> = reachable([1u8], |&n| if n < 3 { vec![n + 1] } else { vec![] });
/// assert_eq!(live.len(), 3);
/// ```
pub mod prelude;

pub mod graph;
pub mod utils;

/// `xykit` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `xykit` Error type
///
/// The error type for all fallible operations in this crate.
pub use error::Error;
