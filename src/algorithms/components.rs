// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Strongly connected components by forward/reverse reachability
//!
//! The component of `v` is everything reachable from `v` that can also reach
//! `v`. Every node on a path between two members is itself a member, so the
//! reverse sweep only needs to walk nodes the forward sweep already claimed.
//!
//! The full partition uses Kosaraju's two passes instead of repeating the
//! single-node query, keeping it linear in the size of the graph.

use super::GraphAlgo;
use crate::graph::DiGraph;
use crate::types::NodeId;
use std::collections::btree_map::Keys;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::iter::Flatten;
use std::option;
use tracing::trace;

/// Generation-stamped visit marks
///
/// Each sweep takes a fresh generation, so marks from earlier sweeps never
/// need clearing.
#[derive(Debug, Default)]
struct VisitMarks {
    marks: HashMap<NodeId, u64>,
    generation: u64,
}

impl VisitMarks {
    fn advance(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Stamp `id` with `generation` unless it already carries it.
    /// With `require`, only nodes currently stamped `require` qualify.
    fn claim(&mut self, id: NodeId, require: Option<u64>, generation: u64) -> bool {
        let current = self.marks.get(&id).copied();
        if current == Some(generation) {
            return false;
        }
        if require.is_some() && current != require {
            return false;
        }
        self.marks.insert(id, generation);
        true
    }
}

/// Depth-first sweep from `start`, returning every node `admit` accepted.
fn sweep<'a, N, A>(start: NodeId, neighbors: N, mut admit: A) -> Vec<NodeId>
where
    N: Fn(NodeId) -> Option<&'a BTreeMap<NodeId, f64>>,
    A: FnMut(NodeId) -> bool,
{
    if !admit(start) {
        return Vec::new();
    }
    let mut reached = vec![start];
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        for &next in neighbors(node).into_iter().flat_map(BTreeMap::keys) {
            if admit(next) {
                reached.push(next);
                stack.push(next);
            }
        }
    }
    reached
}

impl GraphAlgo<'_> {
    /// The strongly connected component containing `id`
    ///
    /// Returns `None` if `id` is absent. The result always contains `id`.
    #[must_use]
    pub fn connected_component(&self, id: NodeId) -> Option<BTreeSet<NodeId>> {
        if !self.graph.contains_node(id) {
            return None;
        }
        let graph = self.graph;
        let mut marks = VisitMarks::default();

        let forward = marks.advance();
        sweep(id, |n| graph.out_neighbors(n), |n| marks.claim(n, None, forward));

        let backward = marks.advance();
        let members = sweep(
            id,
            |n| graph.in_neighbors(n),
            |n| marks.claim(n, Some(forward), backward),
        );

        Some(members.into_iter().collect())
    }

    /// Partition every node into strongly connected components
    ///
    /// Kosaraju: one depth-first pass over the graph records finish order,
    /// then sweeps over the transpose in reverse finish order each claim
    /// exactly one component. Every node and edge is examined a bounded
    /// number of times, so the whole partition is O(V + E).
    ///
    /// Components are returned ordered by their smallest member, so the
    /// output is deterministic. Compare results as sets: the order carries
    /// no meaning.
    #[must_use]
    pub fn connected_components(&self) -> Vec<BTreeSet<NodeId>> {
        self.partition().0
    }

    /// Components plus the number of node examinations it took to find them
    fn partition(&self) -> (Vec<BTreeSet<NodeId>>, usize) {
        let graph = self.graph;
        let transposed = graph.transpose();
        let mut marks = VisitMarks::default();
        let mut examined = 0usize;

        let forward = marks.advance();
        let order = finish_order(graph, &mut marks, forward, &mut examined);

        // A node stamped `forward` is still unassigned; joining a component
        // restamps it, so each node is claimed once across all sweeps.
        let assigned = marks.advance();
        let mut components: Vec<BTreeSet<NodeId>> = Vec::new();
        for &root in order.iter().rev() {
            let members = sweep(
                root,
                |n| transposed.out_neighbors(n),
                |n| {
                    examined += 1;
                    marks.claim(n, Some(forward), assigned)
                },
            );
            if members.is_empty() {
                continue;
            }
            trace!(root, size = members.len(), "component found");
            components.push(members.into_iter().collect());
        }

        components.sort_unstable_by_key(|c| c.first().copied());
        (components, examined)
    }
}

type Successors<'a> = Flatten<option::IntoIter<Keys<'a, NodeId, f64>>>;

fn successors(graph: &DiGraph, id: NodeId) -> Successors<'_> {
    graph.out_neighbors(id).map(BTreeMap::keys).into_iter().flatten()
}

/// Iterative depth-first search over every node in id order, returning
/// nodes in the order they finish.
fn finish_order(
    graph: &DiGraph,
    marks: &mut VisitMarks,
    generation: u64,
    examined: &mut usize,
) -> Vec<NodeId> {
    let mut order = Vec::with_capacity(graph.vertex_count());

    for root in graph.node_ids() {
        *examined += 1;
        if !marks.claim(root, None, generation) {
            continue;
        }
        let mut stack = vec![(root, successors(graph, root))];

        while let Some((node, next)) = stack.last_mut() {
            let node = *node;
            if let Some(&child) = next.next() {
                *examined += 1;
                if marks.claim(child, None, generation) {
                    stack.push((child, successors(graph, child)));
                }
            } else {
                order.push(node);
                stack.pop();
            }
        }
    }

    order
}
