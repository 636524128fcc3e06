// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Edge management commands - create and remove weighted arcs between nodes

use super::{load_graph, Output};
use crate::types::NodeId;
use anyhow::Result;
use serde_json::json;
use std::path::Path;

/// Run edge command
pub fn run(
    graph_file: &Path,
    action: &str,
    src: Option<NodeId>,
    dest: Option<NodeId>,
    weight: Option<f64>,
    out: Output,
) -> Result<()> {
    let mut graph = load_graph(graph_file)?;

    match action {
        "add" | "create" => {
            let src = src.ok_or_else(|| anyhow::anyhow!("Source node is required"))?;
            let dest = dest.ok_or_else(|| anyhow::anyhow!("Destination node is required"))?;
            let weight = weight.ok_or_else(|| anyhow::anyhow!("Edge weight is required"))?;

            graph.add_edge(src, dest, weight)?;
            graph.save(graph_file)?;
            println!("Created edge: {} -> {} (w = {})", out.node(src), out.node(dest), weight);
        }

        "remove" | "delete" | "rm" => {
            let src = src.ok_or_else(|| anyhow::anyhow!("Source node is required"))?;
            let dest = dest.ok_or_else(|| anyhow::anyhow!("Destination node is required"))?;

            let weight = graph.remove_edge(src, dest)?;
            graph.save(graph_file)?;
            println!("Removed edge: {} -> {} (w = {})", out.node(src), out.node(dest), weight);
        }

        "list" | "ls" => {
            if out.json {
                let edges: Vec<_> = graph
                    .edges()
                    .map(|(src, dest, w)| json!({ "src": src, "dest": dest, "w": w }))
                    .collect();
                return out.print_json(&json!(edges));
            }

            if graph.edge_count() == 0 {
                println!("No edges defined. Use 'wdigraph edge add <src> <dest> <w>' to create one.");
                return Ok(());
            }

            println!("{}", out.heading(&format!("Edges ({}):", graph.edge_count())));
            for (src, dest, w) in graph.edges() {
                println!("  {} --[{}]--> {}", out.node(src), w, out.node(dest));
            }
        }

        other => {
            anyhow::bail!("Unknown action: {}. Valid: add, remove, list", other);
        }
    }

    Ok(())
}
