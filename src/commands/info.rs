// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Info command - summary of the graph

use super::{load_graph, Output};
use anyhow::Result;
use serde_json::json;
use std::path::Path;

/// Run the info command
pub fn run(graph_file: &Path, out: Output) -> Result<()> {
    let graph = load_graph(graph_file)?;

    if out.json {
        return out.print_json(&json!({
            "file": graph_file.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
        }));
    }

    println!("{} {}", out.heading("Graph:"), graph_file.display());
    print!("{graph}");
    Ok(())
}
