#![no_main]

use libfuzzer_sys::fuzz_target;
use xykit::graph::{dot_code, label_attrs, reachable};

// Every byte pair (from, to) is an edge; nodes are the distinct bytes in order of appearance.
fuzz_target!(|data: &[u8]| {
    let edges = |n: &u8| {
        data.chunks_exact(2)
            .filter(|pair| pair[0] == *n)
            .map(|pair| pair[1])
            .collect::<Vec<u8>>()
    };

    let Some(&root) = data.first() else {
        return;
    };
    let live = reachable([root], edges);

    let mut nodes: Vec<u8> = live.into_iter().collect();
    nodes.sort_unstable();
    let code = dot_code(&nodes, edges, "fuzz", "", |n| label_attrs(&n.to_string()));

    let text = String::from_utf8(code).expect("DOT output is UTF-8");
    assert!(text.starts_with("digraph fuzz {\n"));
    assert!(text.ends_with("}\n"));
});
