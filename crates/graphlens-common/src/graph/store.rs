// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Weighted directed multigraph used by every analysis engine.
//!
//! The store provides:
//! - An id-sorted registry of every node ever introduced
//! - Per-node outgoing edge lists in insertion order (parallel edges and self-loops kept)
//! - A node bound (`1 + max id`) for sizing array-indexed algorithm state
//! - A monotonic edge counter
//!
//! Iteration order is part of the contract: ascending node id, then insertion
//! order within one node's edge list. Engines rely on this for reproducible
//! component order, tie-breaks and augmenting paths.

use crate::api::error::{GraphError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Node identifier. Ids are scoped by usage; there is no separate identity object.
pub type NodeId = usize;

/// Integer edge weight (capacity for max flow).
pub type Weight = i64;

/// Sentinel distance for nodes a shortest-path query never reached.
pub const INFINITE_DISTANCE: Weight = Weight::MAX;

/// Largest registrable id. The node bound is `1 + max id` and must fit in `usize`.
pub const MAX_NODE_ID: NodeId = usize::MAX - 1;

/// Directed weighted graph with adjacency lists.
///
/// Sparse ids are legal but every array-indexed engine allocates `node_bound`
/// slots, so registering id 1000 alone costs 1001 slots.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Outgoing edges per node: from -> [(to, weight)]
    adjacency: BTreeMap<NodeId, Vec<(NodeId, Weight)>>,
    /// Every node id ever registered
    registry: BTreeSet<NodeId>,
    /// 1 + max registered id
    node_bound: usize,
    /// Total directed edges ever inserted
    edge_count: usize,
}

impl GraphStore {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by inserting `(from, to, weight)` triples in order.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId, Weight)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Registers a node. Idempotent; returns true if the node was newly added.
    ///
    /// # Panics
    ///
    /// Panics if `id` is greater than [`MAX_NODE_ID`]. Loaders reject such ids
    /// with [`GraphError::Parse`] before they reach the store.
    pub fn add_node(&mut self, id: NodeId) -> bool {
        assert!(id <= MAX_NODE_ID, "node id {id} exceeds MAX_NODE_ID");
        self.node_bound = self.node_bound.max(id + 1);
        self.adjacency.entry(id).or_default();
        self.registry.insert(id)
    }

    /// Appends a directed edge, registering both endpoints.
    ///
    /// No validation: negative weights, duplicates and self-loops are stored as given.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.add_node(from);
        self.add_node(to);

        self.adjacency.entry(from).or_default().push((to, weight));
        self.edge_count += 1;
    }

    /// Appends a directed edge with the default weight of 1.
    pub fn add_unit_edge(&mut self, from: NodeId, to: NodeId) {
        self.add_edge(from, to, 1);
    }

    /// Checks if a node id has been registered.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.registry.contains(&id)
    }

    /// Fails with [`GraphError::InvalidNode`] unless `id < node_bound`.
    pub fn check_node(&self, id: NodeId) -> Result<()> {
        if id < self.node_bound {
            Ok(())
        } else {
            Err(GraphError::InvalidNode {
                id,
                node_bound: self.node_bound,
            })
        }
    }

    /// Registered node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.registry.iter().copied()
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    /// `1 + max(id)` over all registered ids; 0 for an empty graph.
    pub fn node_bound(&self) -> usize {
        self.node_bound
    }

    /// Total directed edges ever inserted.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Outgoing `(target, weight)` pairs of a node, in insertion order.
    pub fn out_edges(&self, id: NodeId) -> &[(NodeId, Weight)] {
        self.adjacency.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Adjacency entries as `(node, edges)` in ascending node order.
    pub fn adjacency(&self) -> impl Iterator<Item = (NodeId, &[(NodeId, Weight)])> + '_ {
        self.adjacency.iter().map(|(&id, edges)| (id, edges.as_slice()))
    }

    /// All edges as `(from, to, weight)` triples in contract order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&from, edges)| edges.iter().map(move |&(to, w)| (from, to, w)))
    }

    /// True iff the node has no outgoing edges and nothing targets it.
    ///
    /// No reverse index is kept, so this scans every edge in the graph.
    pub fn is_isolated(&self, id: NodeId) -> bool {
        if !self.out_edges(id).is_empty() {
            return false;
        }
        !self
            .adjacency
            .values()
            .any(|edges| edges.iter().any(|&(to, _)| to == id))
    }

    /// Registered ids with no incident edges, ascending.
    pub fn isolated_nodes(&self) -> Vec<NodeId> {
        self.nodes().filter(|&id| self.is_isolated(id)).collect()
    }

    /// Ids with at least one edge to themselves, ascending.
    pub fn self_loop_nodes(&self) -> Vec<NodeId> {
        self.adjacency
            .iter()
            .filter(|(id, edges)| edges.iter().any(|(to, _)| to == *id))
            .map(|(&id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut g = GraphStore::new();
        assert!(g.add_node(3));
        assert!(!g.add_node(3));

        assert_eq!(g.node_count(), 1);
        assert_eq!(g.node_bound(), 4);
        assert_eq!(g.edge_count(), 0);
        assert!(g.out_edges(3).is_empty());
    }

    #[test]
    fn test_max_node_id_fills_bound() {
        let mut g = GraphStore::new();
        assert!(g.add_node(MAX_NODE_ID));
        assert_eq!(g.node_bound(), usize::MAX);
        assert!(g.check_node(MAX_NODE_ID).is_ok());
    }

    #[test]
    #[should_panic(expected = "exceeds MAX_NODE_ID")]
    fn test_node_id_above_limit_panics() {
        GraphStore::new().add_node(usize::MAX);
    }

    #[test]
    fn test_sparse_id_raises_bound() {
        let mut g = GraphStore::new();
        g.add_node(1000);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.node_bound(), 1001);

        // Lower ids never shrink the bound
        g.add_node(2);
        assert_eq!(g.node_bound(), 1001);
    }

    #[test]
    fn test_parallel_edges_and_self_loops_preserved() {
        let mut g = GraphStore::new();
        g.add_edge(0, 1, 5);
        g.add_edge(0, 1, 2);
        g.add_edge(0, 0, 7);
        g.add_unit_edge(1, 0);

        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.out_edges(0), &[(1, 5), (1, 2), (0, 7)]);
        assert_eq!(g.out_edges(1), &[(0, 1)]);
        assert_eq!(g.self_loop_nodes(), vec![0]);
    }

    #[test]
    fn test_edge_iteration_order() {
        let g = GraphStore::from_edges([(2, 0, 1), (0, 2, 3), (0, 1, 4)]);
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(0, 2, 3), (0, 1, 4), (2, 0, 1)]);
        assert_eq!(g.nodes().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_isolation_toggles_on_incoming_edge() {
        let mut g = GraphStore::new();
        g.add_node(4);
        g.add_edge(0, 1, 1);
        assert!(g.is_isolated(4));
        assert_eq!(g.isolated_nodes(), vec![4]);

        g.add_edge(0, 4, 1);
        assert!(!g.is_isolated(4));
        assert!(g.isolated_nodes().is_empty());
    }

    #[test]
    fn test_self_loop_is_not_isolated() {
        let g = GraphStore::from_edges([(8, 8, 1)]);
        assert!(!g.is_isolated(8));
    }

    #[test]
    fn test_unregistered_id_is_isolated() {
        let g = GraphStore::from_edges([(0, 2, 1)]);
        // Id 1 is inside the bound but was never registered
        assert!(g.is_isolated(1));
        assert!(!g.contains_node(1));
        assert_eq!(g.isolated_nodes(), Vec::<NodeId>::new());
    }

    #[test]
    fn test_check_node() {
        let g = GraphStore::from_edges([(0, 2, 1)]);
        assert!(g.check_node(0).is_ok());
        assert!(g.check_node(2).is_ok());
        let err = g.check_node(3).unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidNode {
                id: 3,
                node_bound: 3
            }
        ));
    }
}
