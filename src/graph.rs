// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Directed weighted graph with dual-indexed adjacency

use crate::error::{GraphError, GraphResult};
use crate::types::{NodeId, Position};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// A vertex and its incident edges
///
/// Every edge `u -> v` with weight `w` is recorded twice: as `v => w` in the
/// out-map of `u` and as `u => w` in the in-map of `v`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    position: Option<Position>,
    out_edges: BTreeMap<NodeId, f64>,
    in_edges: BTreeMap<NodeId, f64>,
}

impl Node {
    fn new(id: NodeId, position: Option<Position>) -> Self {
        Self {
            id,
            position,
            out_edges: BTreeMap::new(),
            in_edges: BTreeMap::new(),
        }
    }

    /// Node id
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Position, if one was given
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Outgoing edges: destination id => weight
    #[must_use]
    pub fn out_edges(&self) -> &BTreeMap<NodeId, f64> {
        &self.out_edges
    }

    /// Incoming edges: source id => weight
    #[must_use]
    pub fn in_edges(&self) -> &BTreeMap<NodeId, f64> {
        &self.in_edges
    }
}

/// A directed graph with strictly positive edge weights
///
/// Nodes are kept ordered by id so iteration is deterministic. The revision
/// counter moves forward once for every mutation that changes the graph and
/// never on a rejected one.
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    nodes: BTreeMap<NodeId, Node>,
    edge_count: usize,
    revision: u64,
}

impl DiGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Mutation counter, usable as a staleness token
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Check if the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check whether a node is present
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Get a node by id
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// All nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// All node ids in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Every edge exactly once as `(src, dest, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.nodes.values().flat_map(|node| {
            node.out_edges
                .iter()
                .map(move |(&dest, &weight)| (node.id, dest, weight))
        })
    }

    /// Outgoing edges of a node, or `None` if the node is absent
    #[must_use]
    pub fn out_neighbors(&self, id: NodeId) -> Option<&BTreeMap<NodeId, f64>> {
        self.nodes.get(&id).map(|n| &n.out_edges)
    }

    /// Incoming edges of a node, or `None` if the node is absent
    #[must_use]
    pub fn in_neighbors(&self, id: NodeId) -> Option<&BTreeMap<NodeId, f64>> {
        self.nodes.get(&id).map(|n| &n.in_edges)
    }

    /// Weight of the edge `src -> dest`, if present
    #[must_use]
    pub fn edge_weight(&self, src: NodeId, dest: NodeId) -> Option<f64> {
        self.nodes
            .get(&src)
            .and_then(|n| n.out_edges.get(&dest))
            .copied()
    }

    /// Add a node
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeExists`] if the id is taken.
    pub fn add_node(&mut self, id: NodeId, position: Option<Position>) -> GraphResult<()> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::NodeExists(id));
        }
        self.nodes.insert(id, Node::new(id, position));
        self.revision += 1;
        debug!(node = id, "added node");
        Ok(())
    }

    /// Remove a node together with every edge touching it
    ///
    /// The revision moves forward once for the whole removal, however many
    /// edges went with the node.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if the node is absent.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Node> {
        let node = self.nodes.remove(&id).ok_or(GraphError::NodeNotFound(id))?;

        for src in node.in_edges.keys() {
            if let Some(neighbor) = self.nodes.get_mut(src) {
                neighbor.out_edges.remove(&id);
            }
            self.edge_count -= 1;
        }
        for dest in node.out_edges.keys() {
            if let Some(neighbor) = self.nodes.get_mut(dest) {
                neighbor.in_edges.remove(&id);
            }
            self.edge_count -= 1;
        }

        self.revision += 1;
        debug!(
            node = id,
            removed_edges = node.in_edges.len() + node.out_edges.len(),
            "removed node"
        );
        Ok(node)
    }

    /// Add the edge `src -> dest`
    ///
    /// # Errors
    ///
    /// - [`GraphError::SelfLoop`] if `src == dest`
    /// - [`GraphError::NodeNotFound`] if either endpoint is absent
    /// - [`GraphError::InvalidWeight`] unless `weight` is finite and positive
    /// - [`GraphError::EdgeExists`] if the edge is already present
    pub fn add_edge(&mut self, src: NodeId, dest: NodeId, weight: f64) -> GraphResult<()> {
        if src == dest {
            return Err(GraphError::SelfLoop(src));
        }
        if !self.nodes.contains_key(&src) {
            return Err(GraphError::NodeNotFound(src));
        }
        if !self.nodes.contains_key(&dest) {
            return Err(GraphError::NodeNotFound(dest));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(GraphError::InvalidWeight { src, dest, weight });
        }

        let Some(src_node) = self.nodes.get_mut(&src) else {
            return Err(GraphError::NodeNotFound(src));
        };
        if src_node.out_edges.contains_key(&dest) {
            return Err(GraphError::EdgeExists { src, dest });
        }
        src_node.out_edges.insert(dest, weight);
        if let Some(dest_node) = self.nodes.get_mut(&dest) {
            dest_node.in_edges.insert(src, weight);
        }

        self.edge_count += 1;
        self.revision += 1;
        debug!(src, dest, weight, "added edge");
        Ok(())
    }

    /// Remove the edge `src -> dest`, returning its weight
    ///
    /// # Errors
    ///
    /// - [`GraphError::NodeNotFound`] if either endpoint is absent
    /// - [`GraphError::EdgeNotFound`] if there is no such edge
    pub fn remove_edge(&mut self, src: NodeId, dest: NodeId) -> GraphResult<f64> {
        if !self.nodes.contains_key(&dest) {
            return Err(GraphError::NodeNotFound(dest));
        }
        let src_node = self
            .nodes
            .get_mut(&src)
            .ok_or(GraphError::NodeNotFound(src))?;
        let weight = src_node
            .out_edges
            .remove(&dest)
            .ok_or(GraphError::EdgeNotFound { src, dest })?;
        if let Some(dest_node) = self.nodes.get_mut(&dest) {
            dest_node.in_edges.remove(&src);
        }

        self.edge_count -= 1;
        self.revision += 1;
        debug!(src, dest, "removed edge");
        Ok(weight)
    }

    /// Build a new graph with every edge reversed
    ///
    /// Node ids, positions and weights are preserved. The result is fully
    /// independent of `self` and starts with its own revision history.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let nodes = self
            .nodes
            .iter()
            .map(|(&id, node)| {
                let reversed = Node {
                    id,
                    position: node.position,
                    out_edges: node.in_edges.clone(),
                    in_edges: node.out_edges.clone(),
                };
                (id, reversed)
            })
            .collect::<BTreeMap<_, _>>();

        Self {
            revision: nodes.len() as u64 + self.edge_count as u64,
            nodes,
            edge_count: self.edge_count,
        }
    }
}

/// Graphs are equal when they hold the same nodes, positions and edges.
/// The revision counter is history, not content, and is ignored.
impl PartialEq for DiGraph {
    fn eq(&self, other: &Self) -> bool {
        self.edge_count == other.edge_count && self.nodes == other.nodes
    }
}

impl fmt::Display for DiGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DiGraph: |V| = {}, |E| = {}", self.vertex_count(), self.edge_count)?;
        for node in self.nodes.values().filter(|n| !n.out_edges.is_empty()) {
            let targets = node
                .out_edges
                .iter()
                .map(|(dest, w)| format!("{dest} ({w:?})"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "  {} -> {}", node.id, targets)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Ten nodes; every `i` points at `10 - i` and `i + 1` with weight `i / 2`.
    /// The edges out of 0 (weight 0), into 10 (absent) and 5 -> 5 are
    /// rejected, leaving 16.
    pub(crate) fn ladder() -> DiGraph {
        let mut g = DiGraph::new();
        for i in 0..10 {
            g.add_node(i, None).unwrap();
        }
        for i in 0..10 {
            let w = i as f64 * 0.5;
            let _ = g.add_edge(i, 10 - i, w);
            let _ = g.add_edge(i, i + 1, w);
        }
        g
    }

    #[test]
    fn test_counts() {
        let g = ladder();
        assert_eq!(g.vertex_count(), 10);
        assert_eq!(g.edge_count(), 16);
        assert_eq!(g.edges().count(), 16);
        let out_degrees: usize = g.nodes().map(|n| n.out_edges().len()).sum();
        let in_degrees: usize = g.nodes().map(|n| n.in_edges().len()).sum();
        assert_eq!(out_degrees, 16);
        assert_eq!(in_degrees, 16);
    }

    #[test]
    fn test_add_node_duplicate() {
        let mut g = DiGraph::new();
        g.add_node(1, Some(Position::new(1.0, 2.0))).unwrap();
        let rev = g.revision();

        assert_eq!(g.add_node(1, None), Err(GraphError::NodeExists(1)));
        assert_eq!(g.revision(), rev);
        assert_eq!(g.node(1).and_then(Node::position), Some(Position::new(1.0, 2.0)));
    }

    #[test]
    fn test_add_edge_preconditions() {
        let mut g = DiGraph::new();
        g.add_node(1, None).unwrap();
        g.add_node(2, None).unwrap();
        let rev = g.revision();

        assert_eq!(g.add_edge(1, 1, 5.0), Err(GraphError::SelfLoop(1)));
        assert_eq!(g.add_edge(1, 3, 5.0), Err(GraphError::NodeNotFound(3)));
        assert_eq!(g.add_edge(4, 1, 5.0), Err(GraphError::NodeNotFound(4)));
        assert!(matches!(g.add_edge(1, 2, 0.0), Err(GraphError::InvalidWeight { .. })));
        assert!(matches!(g.add_edge(1, 2, -2.0), Err(GraphError::InvalidWeight { .. })));
        assert!(matches!(g.add_edge(1, 2, f64::NAN), Err(GraphError::InvalidWeight { .. })));
        assert!(matches!(
            g.add_edge(1, 2, f64::INFINITY),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.revision(), rev);

        g.add_edge(1, 2, 1.5).unwrap();
        assert_eq!(g.add_edge(1, 2, 3.0), Err(GraphError::EdgeExists { src: 1, dest: 2 }));
        assert_eq!(g.edge_weight(1, 2), Some(1.5));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.revision(), rev + 1);
    }

    #[test]
    fn test_dual_index() {
        let g = ladder();
        for (src, dest, w) in g.edges() {
            assert_eq!(g.in_neighbors(dest).and_then(|m| m.get(&src)), Some(&w));
        }
        assert!(g.in_neighbors(6).unwrap().contains_key(&4));
        assert!(g.in_neighbors(6).unwrap().contains_key(&5));
        assert!(g.out_neighbors(1).unwrap().contains_key(&9));
        assert!(g.out_neighbors(1).unwrap().contains_key(&2));
        assert!(g.out_neighbors(42).is_none());
    }

    #[test]
    fn test_remove_edge() {
        let mut g = ladder();
        let rev = g.revision();

        assert_eq!(g.remove_edge(0, 0), Err(GraphError::EdgeNotFound { src: 0, dest: 0 }));
        assert_eq!(g.remove_edge(3, 11), Err(GraphError::NodeNotFound(11)));
        assert_eq!(g.edge_count(), 16);

        assert_eq!(g.remove_edge(3, 7), Ok(1.5));
        assert_eq!(g.edge_count(), 15);
        assert_eq!(g.revision(), rev + 1);
        assert!(!g.in_neighbors(7).unwrap().contains_key(&3));
        assert_eq!(g.remove_edge(3, 7), Err(GraphError::EdgeNotFound { src: 3, dest: 7 }));
    }

    #[test]
    fn test_remove_node_detaches_edges() {
        let mut g = ladder();
        let rev = g.revision();
        let incident = g.in_neighbors(1).unwrap().len() + g.out_neighbors(1).unwrap().len();

        let removed = g.remove_node(1).unwrap();
        assert_eq!(removed.id(), 1);
        assert_eq!(g.edge_count(), 16 - incident);
        assert_eq!(g.vertex_count(), 9);
        assert_eq!(g.revision(), rev + 1);
        assert!(g.nodes().all(|n| !n.out_edges().contains_key(&1) && !n.in_edges().contains_key(&1)));

        assert_eq!(g.remove_node(1).map(|n| n.id()), Err(GraphError::NodeNotFound(1)));
        assert_eq!(g.revision(), rev + 1);
    }

    #[test]
    fn test_readd_node_is_fresh() {
        let mut g = ladder();
        g.remove_node(3).unwrap();
        g.add_node(3, None).unwrap();
        assert!(g.out_neighbors(3).unwrap().is_empty());
        assert!(g.in_neighbors(3).unwrap().is_empty());
    }

    #[test]
    fn test_transpose() {
        let mut g = ladder();
        g.remove_node(0).unwrap();
        g.add_node(0, Some(Position::new(4.0, 5.0))).unwrap();
        let t = g.transpose();

        assert_eq!(t.vertex_count(), g.vertex_count());
        assert_eq!(t.edge_count(), g.edge_count());
        for (src, dest, w) in g.edges() {
            assert_eq!(t.edge_weight(dest, src), Some(w));
        }
        assert_eq!(t.node(0).and_then(Node::position), Some(Position::new(4.0, 5.0)));
        assert_eq!(t.transpose(), g);
    }

    #[test]
    fn test_equality_ignores_revision() {
        let mut a = DiGraph::new();
        a.add_node(1, None).unwrap();
        a.add_node(2, None).unwrap();
        a.add_edge(1, 2, 1.0).unwrap();

        let mut b = a.clone();
        b.remove_edge(1, 2).unwrap();
        assert_ne!(a, b);
        b.add_edge(1, 2, 1.0).unwrap();
        assert_ne!(a.revision(), b.revision());
        assert_eq!(a, b);

        b.remove_edge(1, 2).unwrap();
        b.add_edge(1, 2, 2.0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let mut g = DiGraph::new();
        for i in 0..3 {
            g.add_node(i, None).unwrap();
        }
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(0, 2, 2.5).unwrap();
        g.add_edge(2, 0, 0.5).unwrap();

        insta::assert_snapshot!(g.to_string(), @r###"
        DiGraph: |V| = 3, |E| = 3
          0 -> 1 (1.0), 2 (2.5)
          2 -> 0 (0.5)
        "###);
    }
}
