// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path command - weighted shortest path between two nodes

use super::{load_graph, Output};
use crate::algorithms::GraphAlgo;
use crate::types::NodeId;
use anyhow::Result;
use serde_json::json;
use std::path::Path;
use tracing::info;

/// Run the path command
pub fn run(graph_file: &Path, src: NodeId, dest: NodeId, out: Output) -> Result<()> {
    let graph = load_graph(graph_file)?;
    info!("Shortest path {} -> {}", src, dest);

    let path = GraphAlgo::new(&graph).shortest_path(src, dest);

    if out.json {
        return out.print_json(&match &path {
            Some(p) => json!({ "src": src, "dest": dest, "distance": p.distance, "path": p.nodes }),
            None => json!({ "src": src, "dest": dest, "distance": null, "path": null }),
        });
    }

    match path {
        Some(p) => {
            let hops = p
                .nodes
                .iter()
                .map(|id| out.node(id))
                .collect::<Vec<_>>()
                .join(" -> ");
            println!("{} {}", out.heading("Distance:"), p.distance);
            println!("{} {}", out.heading("Path:"), hops);
        }
        None => println!("No path from {} to {}", out.node(src), out.node(dest)),
    }

    Ok(())
}
