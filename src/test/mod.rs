//! Shared fixtures for unit tests.

use std::collections::HashMap;

/// The five-node sample graph used throughout the graph tests.
///
/// ```text
/// A -> B, C
/// B -> D
/// C
/// D -> A
/// E -> A, B
/// ```
pub fn sample_graph() -> HashMap<&'static str, Vec<&'static str>> {
    HashMap::from([
        ("A", vec!["B", "C"]),
        ("B", vec!["D"]),
        ("C", vec![]),
        ("D", vec!["A"]),
        ("E", vec!["A", "B"]),
    ])
}

/// Edge lookup over a sample graph; unknown keys are sinks.
pub fn sample_edges<'a>(
    graph: &'a HashMap<&'static str, Vec<&'static str>>,
) -> impl Fn(&&'static str) -> Vec<&'static str> + 'a {
    move |key: &&'static str| graph.get(key).cloned().unwrap_or_default()
}
