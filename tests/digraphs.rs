//! Integration tests for reachability and DOT rendering.
//!
//! Covers the documented worked examples end to end and checks the reachability guarantees
//! (roots included, closure, minimality, single lookup per node) on random graphs.

use std::{cell::RefCell, collections::HashMap};

use proptest::prelude::*;
use xykit::{
    assert_text_eq,
    graph::{dot_code, label_attrs, reachable, DotConfig},
    utils::{sorted_by_key, SeqExt},
};

fn sample_graph() -> HashMap<&'static str, Vec<&'static str>> {
    HashMap::from([
        ("A", vec!["B", "C"]),
        ("B", vec!["D"]),
        ("C", vec![]),
        ("D", vec!["A"]),
        ("E", vec!["A", "B"]),
    ])
}

/// Plain depth-first reachability used as the reference result.
fn reference_reachable(graph: &[Vec<usize>], roots: &[usize]) -> Vec<usize> {
    let mut seen = vec![false; graph.len()];
    let mut stack: Vec<usize> = roots.to_vec();
    while let Some(node) = stack.pop() {
        if seen[node] {
            continue;
        }
        seen[node] = true;
        stack.extend(graph[node].iter().copied());
    }
    (0..graph.len()).filter(|&n| seen[n]).collect()
}

fn graph_and_roots() -> impl Strategy<Value = (Vec<Vec<usize>>, Vec<usize>)> {
    (1usize..24).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(0..n, 0..4), n),
            prop::collection::vec(0..n, 0..6),
        )
    })
}

#[test]
fn test_reachable_worked_example() {
    let graph = sample_graph();
    let result = reachable(["A", "B"], |k| graph[k].clone());
    assert_eq!(result.sorted().into_iter().join(" "), "A B C D");
}

// `C` is not in the node list, so `A -> C` is dropped (see DESIGN.md, "Edges to nodes outside
// the list").
#[test]
fn test_dot_worked_example() {
    let graph = sample_graph();
    let code = dot_code(
        &["A", "B", "D", "E"],
        |k| graph[k].clone(),
        "my_graph",
        "node[shape=box, style=filled]",
        |k| format!("[label={k:?}]"),
    );

    assert_text_eq!(
        "digraph my_graph {
  node[shape=box, style=filled]
  0 [label=\"A\"]
  1 [label=\"B\"]
  2 [label=\"D\"]
  3 [label=\"E\"]
  0 -> {1}
  1 -> {2}
  2 -> {0}
  3 -> {0 1}
}
",
        String::from_utf8(code).unwrap()
    );
}

#[test]
fn test_dot_of_reachable_subgraph() {
    let graph = sample_graph();
    let live = reachable(["B"], |k| graph[k].clone());
    let nodes: Vec<&str> = live.sorted().into_iter().copied().collect();

    let mut out: Vec<u8> = Vec::new();
    DotConfig::new("live")
        .with_prelude("rankdir=LR")
        .write_to(&mut out, &nodes, |k| graph[k].clone(), |k| label_attrs(k))
        .unwrap();

    assert_text_eq!(
        "digraph live {
  rankdir=LR
  0 [label=\"A\"]
  1 [label=\"B\"]
  2 [label=\"C\"]
  3 [label=\"D\"]
  0 -> {1 2}
  1 -> {3}
  3 -> {0}
}
",
        String::from_utf8(out).unwrap()
    );
}

#[test]
fn test_dot_struct_keys() {
    #[derive(PartialEq, Eq, Hash, Debug)]
    struct Task {
        id: u32,
        name: &'static str,
    }

    let tasks = [
        Task { id: 1, name: "fetch" },
        Task { id: 2, name: "build" },
        Task { id: 3, name: "test" },
    ];
    let deps: HashMap<u32, Vec<u32>> = HashMap::from([(2, vec![1]), (3, vec![2, 1])]);

    let code = dot_code(
        &tasks,
        |t| {
            deps.get(&t.id)
                .into_iter()
                .flatten()
                .filter_map(|id| tasks.iter().find(|t| t.id == *id))
                .map(|t| Task { id: t.id, name: t.name })
                .collect::<Vec<_>>()
        },
        "pipeline",
        "",
        |t| label_attrs(t.name),
    );

    assert_text_eq!(
        "digraph pipeline {
  0 [label=\"fetch\"]
  1 [label=\"build\"]
  2 [label=\"test\"]
  1 -> {0}
  2 -> {1 0}
}
",
        String::from_utf8(code).unwrap()
    );
}

#[test]
fn test_reachable_over_sorted_map_listing() {
    let graph = sample_graph();
    let listing: Vec<String> = sorted_by_key(&graph)
        .map(|(k, v)| format!("{k}:{}", v.iter().join(",")))
        .collect();
    assert_eq!(listing, vec!["A:B,C", "B:D", "C:", "D:A", "E:A,B"]);

    let from_every_node: Vec<usize> = sorted_by_key(&graph)
        .map(|(k, _)| reachable([*k], |n| graph[n].clone()).len())
        .collect();
    assert_eq!(from_every_node, vec![4, 4, 1, 4, 5]);
}

proptest! {
    #[test]
    fn prop_roots_are_reachable((graph, roots) in graph_and_roots()) {
        let result = reachable(roots.iter().copied(), |&n| graph[n].clone());
        for root in &roots {
            prop_assert!(result.has(root));
        }
    }

    #[test]
    fn prop_result_is_closed((graph, roots) in graph_and_roots()) {
        let result = reachable(roots.iter().copied(), |&n| graph[n].clone());
        for node in result.values() {
            for target in &graph[*node] {
                prop_assert!(result.has(target));
            }
        }
    }

    #[test]
    fn prop_result_is_minimal((graph, roots) in graph_and_roots()) {
        let result = reachable(roots.iter().copied(), |&n| graph[n].clone());
        let expected = reference_reachable(&graph, &roots);
        let got: Vec<usize> = result.sorted().into_iter().copied().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_each_node_looked_up_once((graph, roots) in graph_and_roots()) {
        let calls = RefCell::new(vec![0usize; graph.len()]);
        let result = reachable(roots.iter().copied(), |&n| {
            calls.borrow_mut()[n] += 1;
            graph[n].clone()
        });
        let calls = calls.into_inner();
        for (node, count) in calls.iter().enumerate() {
            let expected = usize::from(result.has(&node));
            prop_assert_eq!(*count, expected);
        }
    }

    #[test]
    fn prop_dot_edge_lines_match_filtered_edges(
        (graph, roots) in graph_and_roots()
    ) {
        let nodes: Vec<usize> = roots.iter().copied().uniq().collect();
        let rendered = String::from_utf8(
            DotConfig::new("g").render(&nodes, |&n| graph[n].clone(), |_| String::new()),
        ).unwrap();

        let edge_lines = rendered.lines().filter(|l| l.contains("->")).count();
        let mut ids = HashMap::new();
        for (id, n) in nodes.iter().enumerate() {
            ids.insert(*n, id);
        }
        let expected = nodes
            .iter()
            .filter(|n| graph[**n].iter().any(|t| ids.contains_key(t)))
            .count();
        prop_assert_eq!(edge_lines, expected);
        prop_assert!(rendered.starts_with("digraph g {\n"), "missing header: {:?}", rendered);
        prop_assert!(rendered.ends_with("}\n"), "missing closing brace: {:?}", rendered);
    }
}
