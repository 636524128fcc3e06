// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;
use wdigraph::{DiGraph, GraphAlgo};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(graph) = DiGraph::from_json(text) else {
        return;
    };

    let out: usize = graph.nodes().map(|n| n.out_edges().len()).sum();
    assert_eq!(out, graph.edge_count());

    // Anything that loads must survive a save/load cycle unchanged
    if let Ok(json) = graph.to_json() {
        let reloaded = DiGraph::from_json(&json).and_then(|g| g.to_json());
        assert_eq!(reloaded.ok().as_deref(), Some(json.as_str()));
    }

    if let Some(first) = graph.node_ids().next() {
        let algo = GraphAlgo::new(&graph);
        let _ = algo.distances_from(first);
        let _ = algo.connected_components();
    }
});
