// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for graph mutations

use crate::types::NodeId;
use thiserror::Error;

/// Precondition violations reported by [`DiGraph`](crate::graph::DiGraph) mutations.
///
/// A mutation that returns one of these leaves the graph exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A node with this id is already present.
    #[error("node already exists: {0}")]
    NodeExists(NodeId),

    /// No node with this id is present.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// Edges from a node to itself are not allowed.
    #[error("self-loop rejected on node {0}")]
    SelfLoop(NodeId),

    /// The edge is already present; parallel edges are not supported.
    #[error("edge already exists: {src} -> {dest}")]
    EdgeExists {
        /// Source node
        src: NodeId,
        /// Destination node
        dest: NodeId,
    },

    /// The edge is not present.
    #[error("edge not found: {src} -> {dest}")]
    EdgeNotFound {
        /// Source node
        src: NodeId,
        /// Destination node
        dest: NodeId,
    },

    /// Edge weights must be finite and strictly positive.
    #[error("invalid weight {weight} on edge {src} -> {dest}: must be finite and > 0")]
    InvalidWeight {
        /// Source node
        src: NodeId,
        /// Destination node
        dest: NodeId,
        /// The rejected weight
        weight: f64,
    },
}

/// Result alias for graph mutations
pub type GraphResult<T> = std::result::Result<T, GraphError>;
