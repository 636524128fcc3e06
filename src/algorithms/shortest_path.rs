// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Dijkstra shortest paths
//!
//! Edge weights are strictly positive (enforced by [`DiGraph::add_edge`]), so
//! a node's distance is final the first time it leaves the heap.

use super::GraphAlgo;
use crate::graph::DiGraph;
use crate::types::NodeId;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap};
use tracing::trace;

/// A shortest path and its total weight
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath {
    /// Nodes from source to target, both included
    pub nodes: Vec<NodeId>,
    /// Sum of the edge weights along `nodes`
    pub distance: f64,
}

impl WeightedPath {
    fn single_node(node: NodeId) -> Self {
        Self { nodes: vec![node], distance: 0.0 }
    }

    /// First node of the path
    #[must_use]
    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node of the path
    #[must_use]
    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of edges in the path
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// True when source and target are the same node
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Heap entry, ordered so that `BinaryHeap` pops the smallest distance first
/// and, among equal distances, the smallest id.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    node: NodeId,
    distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Per-query working state for one node
#[derive(Debug, Clone, Copy)]
struct Scratch {
    distance: f64,
    predecessor: Option<NodeId>,
}

/// Run Dijkstra from `source`, stopping early once `target` is settled.
///
/// Returns the scratch table: every node reached, with its best distance and
/// the node it was reached from.
fn dijkstra(graph: &DiGraph, source: NodeId, target: Option<NodeId>) -> HashMap<NodeId, Scratch> {
    let mut scratch: HashMap<NodeId, Scratch> = HashMap::new();
    let mut heap = BinaryHeap::new();

    scratch.insert(source, Scratch { distance: 0.0, predecessor: None });
    heap.push(HeapEntry { node: source, distance: 0.0 });

    while let Some(HeapEntry { node, distance }) = heap.pop() {
        // Stale entry: a shorter distance was recorded after this push
        if scratch.get(&node).is_some_and(|s| distance > s.distance) {
            continue;
        }
        if Some(node) == target {
            trace!(node, distance, "target settled");
            break;
        }

        let Some(neighbors) = graph.out_neighbors(node) else {
            continue;
        };
        for (&next, &weight) in neighbors {
            let candidate = distance + weight;
            let improved = scratch
                .get(&next)
                .map_or(true, |s| candidate < s.distance);
            if improved {
                scratch.insert(next, Scratch { distance: candidate, predecessor: Some(node) });
                heap.push(HeapEntry { node: next, distance: candidate });
            }
        }
    }

    scratch
}

impl GraphAlgo<'_> {
    /// Shortest weighted path from `src` to `dest`
    ///
    /// Returns `None` when either node is absent or `dest` cannot be reached
    /// from `src`. A node's path to itself is `[src]` with distance 0.
    #[must_use]
    pub fn shortest_path(&self, src: NodeId, dest: NodeId) -> Option<WeightedPath> {
        if !self.graph.contains_node(src) || !self.graph.contains_node(dest) {
            return None;
        }
        if src == dest {
            return Some(WeightedPath::single_node(src));
        }

        let scratch = dijkstra(self.graph, src, Some(dest));
        let distance = scratch.get(&dest)?.distance;

        let mut nodes = vec![dest];
        let mut current = dest;
        while let Some(prev) = scratch.get(&current).and_then(|s| s.predecessor) {
            nodes.push(prev);
            current = prev;
        }
        nodes.reverse();

        Some(WeightedPath { nodes, distance })
    }

    /// Length of the shortest path, or `f64::INFINITY` when there is none
    #[must_use]
    pub fn shortest_distance(&self, src: NodeId, dest: NodeId) -> f64 {
        self.shortest_path(src, dest)
            .map_or(f64::INFINITY, |p| p.distance)
    }

    /// Distances from `src` to every node reachable from it, `src` included
    ///
    /// Returns `None` if `src` is absent.
    #[must_use]
    pub fn distances_from(&self, src: NodeId) -> Option<BTreeMap<NodeId, f64>> {
        if !self.graph.contains_node(src) {
            return None;
        }
        let scratch = dijkstra(self.graph, src, None);
        Some(scratch.into_iter().map(|(id, s)| (id, s.distance)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::ladder;

    #[test]
    fn test_shortest_path_ladder() {
        let g = ladder();
        let algo = GraphAlgo::new(&g);

        let path = algo.shortest_path(1, 7).unwrap();
        assert_eq!(path.distance, 3.0);
        assert_eq!(path.nodes, vec![1, 2, 3, 7]);
        assert_eq!(path.len(), 3);

        let path = algo.shortest_path(3, 9).unwrap();
        assert_eq!(path.distance, 9.0);
        assert_eq!(path.nodes, vec![3, 7, 8, 9]);
    }

    #[test]
    fn test_shortest_path_absent_or_unreachable() {
        let g = ladder();
        let algo = GraphAlgo::new(&g);

        assert_eq!(algo.shortest_path(1, 88), None);
        assert_eq!(algo.shortest_path(88, 1), None);
        // Nothing points into 0
        assert_eq!(algo.shortest_path(1, 0), None);
        assert_eq!(algo.shortest_distance(1, 0), f64::INFINITY);
    }

    #[test]
    fn test_shortest_path_to_self() {
        let g = ladder();
        let algo = GraphAlgo::new(&g);

        let path = algo.shortest_path(4, 4).unwrap();
        assert_eq!(path, WeightedPath { nodes: vec![4], distance: 0.0 });
        assert!(path.is_empty());
        assert_eq!(path.source(), Some(4));
        assert_eq!(path.target(), Some(4));
    }

    #[test]
    fn test_prefers_lighter_longer_route() {
        let mut g = DiGraph::new();
        for i in 0..4 {
            g.add_node(i, None).unwrap();
        }
        g.add_edge(0, 3, 10.0).unwrap();
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();

        let algo = GraphAlgo::new(&g);
        let path = algo.shortest_path(0, 3).unwrap();
        assert_eq!(path.nodes, vec![0, 1, 2, 3]);
        assert_eq!(path.distance, 3.0);
    }

    #[test]
    fn test_tie_is_deterministic() {
        let mut g = DiGraph::new();
        for i in 0..4 {
            g.add_node(i, None).unwrap();
        }
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(0, 2, 1.0).unwrap();
        g.add_edge(1, 3, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();

        let algo = GraphAlgo::new(&g);
        let first = algo.shortest_path(0, 3).unwrap();
        for _ in 0..10 {
            assert_eq!(algo.shortest_path(0, 3).unwrap(), first);
        }
        // Node 1 settles before node 2 and claims 3 first
        assert_eq!(first.nodes, vec![0, 1, 3]);
    }

    #[test]
    fn test_distances_from() {
        let g = ladder();
        let algo = GraphAlgo::new(&g);

        let dist = algo.distances_from(1).unwrap();
        assert_eq!(dist.get(&1), Some(&0.0));
        assert_eq!(dist.get(&7), Some(&3.0));
        assert!(!dist.contains_key(&0));
        assert_eq!(dist.len(), 9);
        assert!(algo.distances_from(-5).is_none());
    }
}
