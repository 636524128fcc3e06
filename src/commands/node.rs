// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Node management commands - add, remove and list vertices

use super::{load_graph, Output};
use crate::types::{NodeId, Position};
use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;

/// Run node command
pub fn run(
    graph_file: &Path,
    action: &str,
    id: Option<NodeId>,
    pos: Option<String>,
    out: Output,
) -> Result<()> {
    let mut graph = load_graph(graph_file)?;

    match action {
        "add" | "create" => {
            let id = id.ok_or_else(|| anyhow::anyhow!("Node id is required"))?;
            let position = pos
                .as_deref()
                .map(str::parse::<Position>)
                .transpose()
                .context("Invalid --pos")?;

            graph.add_node(id, position)?;
            graph.save(graph_file)?;
            println!("Added node {}", out.node(id));
        }

        "remove" | "delete" | "rm" => {
            let id = id.ok_or_else(|| anyhow::anyhow!("Node id is required"))?;

            let removed = graph.remove_node(id)?;
            graph.save(graph_file)?;
            let detached = removed.in_edges().len() + removed.out_edges().len();
            println!("Removed node {} ({} edge(s) detached)", out.node(id), detached);
        }

        "list" | "ls" => {
            if out.json {
                let nodes: Vec<_> = graph
                    .nodes()
                    .map(|n| {
                        json!({
                            "id": n.id(),
                            "pos": n.position().map(|p| p.to_string()),
                            "out_degree": n.out_edges().len(),
                            "in_degree": n.in_edges().len(),
                        })
                    })
                    .collect();
                return out.print_json(&json!(nodes));
            }

            if graph.is_empty() {
                println!("No nodes defined. Use 'wdigraph node add <id>' to create one.");
                return Ok(());
            }

            println!("{}", out.heading(&format!("Nodes ({}):", graph.vertex_count())));
            for node in graph.nodes() {
                let pos = node
                    .position()
                    .map(|p| format!(" @ {p}"))
                    .unwrap_or_default();
                println!(
                    "  {}{}  out={} in={}",
                    out.node(node.id()),
                    pos,
                    node.out_edges().len(),
                    node.in_edges().len()
                );
            }
        }

        other => {
            anyhow::bail!("Unknown action: {}. Valid: add, remove, list", other);
        }
    }

    Ok(())
}
