// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Component commands - strongly connected components

use super::{load_graph, Output};
use crate::algorithms::GraphAlgo;
use crate::types::NodeId;
use anyhow::Result;
use serde_json::json;
use std::collections::BTreeSet;
use std::path::Path;

fn render(members: &BTreeSet<NodeId>, out: Output) -> String {
    let ids = members
        .iter()
        .map(|id| out.node(id))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{ids}}}")
}

/// Print the component containing one node
pub fn run_one(graph_file: &Path, id: NodeId, out: Output) -> Result<()> {
    let graph = load_graph(graph_file)?;
    let component = GraphAlgo::new(&graph)
        .connected_component(id)
        .ok_or_else(|| anyhow::anyhow!("Node not found: {}", id))?;

    if out.json {
        return out.print_json(&json!(component));
    }
    println!("{}", render(&component, out));
    Ok(())
}

/// Print every component
pub fn run_all(graph_file: &Path, out: Output) -> Result<()> {
    let graph = load_graph(graph_file)?;
    let components = GraphAlgo::new(&graph).connected_components();

    if out.json {
        return out.print_json(&json!(components));
    }

    println!("{}", out.heading(&format!("Components ({}):", components.len())));
    for component in &components {
        println!("  {}", render(component, out));
    }
    Ok(())
}
