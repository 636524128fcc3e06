// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Init command - creates an empty graph file

use crate::graph::DiGraph;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Run the init command
pub fn run(graph_file: &Path, force: bool) -> Result<()> {
    if graph_file.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            graph_file.display()
        );
    }

    info!("Initializing {}", graph_file.display());
    DiGraph::new()
        .save(graph_file)
        .with_context(|| format!("Failed to initialize {}", graph_file.display()))?;

    println!("Created empty graph at {}", graph_file.display());
    Ok(())
}
