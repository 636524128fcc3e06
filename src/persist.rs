// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! JSON persistence
//!
//! Document layout:
//!
//! ```json
//! {
//!   "Nodes": [ { "id": 0, "pos": "1.0,2.0,0.0" } ],
//!   "Edges": [ { "src": 0, "dest": 1, "w": 1.5 } ]
//! }
//! ```
//!
//! `pos` is optional on load and always written on save.

use crate::graph::DiGraph;
use crate::types::{NodeId, Position};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Position written for nodes that have none
pub const DEFAULT_POS: &str = "0.0,0.0,0.0";

/// A node entry in the persisted document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node id
    pub id: NodeId,
    /// Position as `"x,y,z"` (or `"x,y"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
}

/// An edge entry in the persisted document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Source node
    pub src: NodeId,
    /// Destination node
    pub dest: NodeId,
    /// Weight
    pub w: f64,
}

/// The persisted graph document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// All nodes
    #[serde(rename = "Nodes", default)]
    pub nodes: Vec<NodeRecord>,
    /// All edges
    #[serde(rename = "Edges", default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Capture a graph; every edge appears exactly once
    #[must_use]
    pub fn from_graph(graph: &DiGraph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| NodeRecord {
                id: node.id(),
                pos: Some(
                    node.position()
                        .map_or_else(|| DEFAULT_POS.to_string(), |p| p.to_string()),
                ),
            })
            .collect();
        let edges = graph
            .edges()
            .map(|(src, dest, w)| EdgeRecord { src, dest, w })
            .collect();
        Self { nodes, edges }
    }

    /// Build a fresh graph from this document
    ///
    /// Edges that the graph rejects (unknown endpoints, self-loops,
    /// non-positive weights, duplicates) and repeated node ids are skipped
    /// with a warning. A malformed `pos` fails the whole conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if any node position cannot be parsed.
    pub fn into_graph(self) -> Result<DiGraph> {
        let mut graph = DiGraph::new();

        for record in self.nodes {
            let position = record
                .pos
                .as_deref()
                .map(str::parse::<Position>)
                .transpose()
                .with_context(|| format!("Invalid position for node {}", record.id))?;
            if let Err(e) = graph.add_node(record.id, position) {
                warn!("Skipping node: {}", e);
            }
        }

        let mut dropped = 0usize;
        for edge in self.edges {
            if let Err(e) = graph.add_edge(edge.src, edge.dest, edge.w) {
                debug!("Skipping edge: {}", e);
                dropped += 1;
            }
        }
        if dropped > 0 {
            warn!("Dropped {} edge(s) rejected by the graph", dropped);
        }

        Ok(graph)
    }
}

impl DiGraph {
    /// Parse a graph from a JSON document string
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or an invalid node position.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: GraphDocument =
            serde_json::from_str(json).context("Failed to parse graph document")?;
        doc.into_graph()
    }

    /// Serialize to a pretty-printed JSON document
    ///
    /// # Errors
    ///
    /// Fails only if serialization itself fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&GraphDocument::from_graph(self))
            .context("Failed to serialize graph to JSON")
    }

    /// Load a graph from a JSON file
    ///
    /// The graph is built from scratch and only returned once the entire
    /// file has been read and applied.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let graph = Self::from_json(&content)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        debug!(
            nodes = graph.vertex_count(),
            edges = graph.edge_count(),
            "loaded {}",
            path.display()
        );
        Ok(graph)
    }

    /// Save the graph to a JSON file, creating parent directories
    ///
    /// # Errors
    ///
    /// Fails if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        }
        let json = self.to_json()?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("saved {}", path.display());
        Ok(())
    }
}
