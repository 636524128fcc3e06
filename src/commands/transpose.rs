// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Transpose command - writes the graph with every edge reversed

use super::load_graph;
use crate::algorithms::transpose;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Run the transpose command
pub fn run(graph_file: &Path, output: Option<PathBuf>) -> Result<()> {
    let graph = load_graph(graph_file)?;
    let reversed = transpose(&graph);

    match output {
        Some(path) => {
            reversed
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Transposed graph written to {}", path.display());
        }
        None => println!("{}", reversed.to_json()?),
    }
    Ok(())
}
