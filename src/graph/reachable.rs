//! Multi-root reachability over caller-defined graphs.
//!
//! The graph is never materialized here. Callers describe it through an edge lookup closure
//! that maps a node key to its outgoing targets, so any representation works: adjacency maps,
//! arena indices, live object graphs, or edges computed on the fly.
//!
//! # Algorithm
//!
//! [`reachable`] performs a level-synchronous breadth-first expansion. It keeps a visited set
//! and the current frontier (initially the roots). Every frontier node that has not been
//! visited yet is marked, its edges are looked up once, and the targets form the next
//! frontier. The two frontier buffers are swapped until no new nodes appear.
//!
//! # Complexity
//!
//! - Time: O(V + E) where V and E are restricted to the reachable subgraph
//! - Space: O(V + E) for the visited set and the frontier buffers

use std::{collections::HashMap, hash::Hash, mem};

use crate::utils::Set;

/// Computes the set of nodes reachable from any of `roots`.
///
/// A node is reachable if there is a path of zero or more edges from some root to it; the roots
/// themselves are therefore always part of the result. Nodes that are only targeted by
/// unreachable nodes are excluded.
///
/// # Arguments
///
/// * `roots` - Starting nodes. Duplicates are allowed and order does not matter
/// * `edges` - Returns the outgoing edge targets of a node (empty for sinks)
///
/// # Returns
///
/// A [`Set`] with every reachable node key.
///
/// # Guarantees
///
/// - `edges` is invoked at most once per distinct reachable key, regardless of in-degree,
///   duplicate roots, or cycles
/// - `edges` is only invoked with keys encountered during the traversal
/// - A root that does not exist in the caller's graph is simply a reachable singleton; keys are
///   never validated against an existence predicate
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use xykit::graph::reachable;
///
/// let graph: HashMap<&str, Vec<&str>> = HashMap::from([
///     ("A", vec!["B", "C"]),
///     ("B", vec!["D"]),
///     ("C", vec![]),
///     ("D", vec!["A"]),
///     ("E", vec!["A", "B"]),
/// ]);
///
/// let result = reachable(["A", "B"], |k| graph[k].clone());
/// assert_eq!(result.sorted(), vec![&"A", &"B", &"C", &"D"]);
/// ```
pub fn reachable<K, R, I, F>(roots: R, mut edges: F) -> Set<K>
where
    K: Eq + Hash,
    R: IntoIterator<Item = K>,
    I: IntoIterator<Item = K>,
    F: FnMut(&K) -> I,
{
    let mut visited = Set::new();
    let mut frontier: Vec<K> = roots.into_iter().collect();
    let mut next: Vec<K> = Vec::new();

    let mut levels = 0usize;
    let mut lookups = 0usize;

    while !frontier.is_empty() {
        levels += 1;
        for node in frontier.drain(..) {
            if visited.has(&node) {
                continue;
            }
            next.extend(edges(&node));
            lookups += 1;
            visited.insert(node);
        }
        mem::swap(&mut frontier, &mut next);
    }

    log::trace!(
        "reachable: {} nodes over {} levels ({} edge lookups)",
        visited.len(),
        levels,
        lookups
    );

    visited
}

/// Computes reachability over an adjacency map.
///
/// Convenience wrapper around [`reachable`] for the common `key -> targets` representation.
/// Keys that are missing from `graph` are treated as sinks.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use xykit::graph::reachable_from_map;
///
/// let graph = HashMap::from([(1, vec![2]), (2, vec![3])]);
/// let result = reachable_from_map([1], &graph);
/// assert_eq!(result.sorted(), vec![&1, &2, &3]);
/// ```
pub fn reachable_from_map<K, R>(roots: R, graph: &HashMap<K, Vec<K>>) -> Set<K>
where
    K: Eq + Hash + Clone,
    R: IntoIterator<Item = K>,
{
    reachable(roots, |node| graph.get(node).cloned().unwrap_or_default())
}
