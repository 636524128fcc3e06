// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph algorithms over a borrowed [`DiGraph`]
//!
//! [`GraphAlgo`] never stores per-node working data on the graph itself.
//! Distances, predecessors and visit marks live in maps owned by the query
//! that needs them, so any number of queries may share one `&DiGraph`.
//!
//! ```
//! use wdigraph::{DiGraph, GraphAlgo};
//!
//! let mut g = DiGraph::new();
//! for id in 0..3 {
//!     g.add_node(id, None).unwrap();
//! }
//! g.add_edge(0, 1, 1.0).unwrap();
//! g.add_edge(1, 2, 1.0).unwrap();
//! g.add_edge(2, 0, 1.0).unwrap();
//!
//! let algo = GraphAlgo::new(&g);
//! let path = algo.shortest_path(0, 2).unwrap();
//! assert_eq!(path.nodes, vec![0, 1, 2]);
//! assert_eq!(algo.connected_components().len(), 1);
//! ```

mod components;
mod shortest_path;

pub use shortest_path::WeightedPath;

use crate::graph::DiGraph;
use anyhow::Result;
use std::path::Path;

/// Query engine over one graph
#[derive(Debug, Clone, Copy)]
pub struct GraphAlgo<'g> {
    graph: &'g DiGraph,
}

impl<'g> GraphAlgo<'g> {
    /// Create an engine over `graph`
    #[must_use]
    pub fn new(graph: &'g DiGraph) -> Self {
        Self { graph }
    }

    /// The graph this engine queries
    #[must_use]
    pub fn graph(&self) -> &'g DiGraph {
        self.graph
    }

    /// Load a graph from a JSON file
    ///
    /// The returned graph is owned by the caller; build an engine over it with
    /// [`GraphAlgo::new`]. Nothing is returned unless the whole file loaded.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid graph document.
    pub fn load_from_json(path: &Path) -> Result<DiGraph> {
        DiGraph::load(path)
    }

    /// Save the queried graph as JSON
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be written.
    pub fn save_to_json(&self, path: &Path) -> Result<()> {
        self.graph.save(path)
    }
}

/// Reverse every edge of `graph` into a new, independent graph
#[must_use]
pub fn transpose(graph: &DiGraph) -> DiGraph {
    graph.transpose()
}
