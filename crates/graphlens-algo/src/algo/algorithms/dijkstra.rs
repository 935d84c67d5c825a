// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Dijkstra's Shortest Path Algorithm.
//!
//! Runs from `source` over the whole reachable graph and reconstructs the path
//! to `target`. Stale heap entries are skipped (lazy deletion). Negative
//! weights are rejected as soon as an edge carrying one is relaxed.

use crate::algo::algorithms::Algorithm;
use crate::algo::telemetry::Probe;
use graphlens_common::{GraphError, GraphStore, INFINITE_DISTANCE, NodeId, Result, Weight};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub struct ShortestPath;

#[derive(Debug, Clone, Default)]
pub struct DijkstraConfig {
    pub source: NodeId,
    pub target: NodeId,
}

#[derive(Debug, Clone)]
pub struct DijkstraResult {
    pub source: NodeId,
    pub target: NodeId,
    /// Nodes from `source` to `target`; empty if `target` was not reached.
    pub path: Vec<NodeId>,
    /// Total path weight, or [`INFINITE_DISTANCE`] if unreachable.
    pub distance: Weight,
    /// Final distance for every id below the node bound.
    pub distances: Vec<Weight>,
}

impl DijkstraResult {
    pub fn is_reachable(&self) -> bool {
        self.distance != INFINITE_DISTANCE
    }
}

impl Algorithm for ShortestPath {
    type Config = DijkstraConfig;
    type Result = DijkstraResult;

    fn name() -> &'static str {
        "Shortest Path"
    }

    fn run(graph: &GraphStore, config: Self::Config, probe: &mut Probe) -> Result<Self::Result> {
        graph.check_node(config.source)?;
        graph.check_node(config.target)?;

        let n = graph.node_bound();
        let mut dist = vec![INFINITE_DISTANCE; n];
        let mut prev: Vec<Option<NodeId>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        dist[config.source] = 0;
        heap.push(Reverse((0, config.source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if d > dist[u] {
                continue;
            }
            probe.tick();

            for &(v, weight) in graph.out_edges(u) {
                if weight < 0 {
                    return Err(GraphError::UnsupportedWeight {
                        from: u,
                        to: v,
                        weight,
                    });
                }

                let new_dist = d.saturating_add(weight);
                if new_dist < dist[v] {
                    dist[v] = new_dist;
                    prev[v] = Some(u);
                    heap.push(Reverse((new_dist, v)));
                }
            }
        }

        let distance = dist[config.target];
        let mut path = Vec::new();
        if distance != INFINITE_DISTANCE {
            let mut curr = Some(config.target);
            while let Some(node) = curr {
                path.push(node);
                curr = prev[node];
            }
            path.reverse();
        }

        Ok(DijkstraResult {
            source: config.source,
            target: config.target,
            path,
            distance,
            distances: dist,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_test_graph, probe};

    fn run(graph: &GraphStore, source: NodeId, target: NodeId) -> Result<DijkstraResult> {
        ShortestPath::run(graph, DijkstraConfig { source, target }, &mut probe())
    }

    #[test]
    fn test_dijkstra_simple() {
        let graph = build_test_graph(&[(0, 1, 4), (0, 2, 3), (1, 2, 1), (1, 3, 5)]);
        let result = run(&graph, 0, 3).unwrap();

        assert_eq!(result.path, vec![0, 1, 3]);
        assert_eq!(result.distance, 9);
        assert_eq!(result.distances, vec![0, 4, 3, 9]);
        assert!(result.is_reachable());
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_detour() {
        // 0 -> 2 directly costs 10, via 1 costs 3
        let graph = build_test_graph(&[(0, 2, 10), (0, 1, 1), (1, 2, 2)]);
        let result = run(&graph, 0, 2).unwrap();
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.distance, 3);
    }

    #[test]
    fn test_dijkstra_unreachable() {
        // Edges are directed: 1 cannot reach 0
        let graph = build_test_graph(&[(0, 1, 1)]);
        let result = run(&graph, 1, 0).unwrap();
        assert!(result.path.is_empty());
        assert_eq!(result.distance, INFINITE_DISTANCE);
        assert!(!result.is_reachable());
    }

    #[test]
    fn test_dijkstra_source_equals_target() {
        let graph = build_test_graph(&[(0, 1, 1), (1, 0, 1)]);
        let result = run(&graph, 1, 1).unwrap();
        assert_eq!(result.path, vec![1]);
        assert_eq!(result.distance, 0);
    }

    #[test]
    fn test_dijkstra_counts_non_stale_pops() {
        // Node 2 is pushed twice (via 0 at 10, via 1 at 2); the stale entry is skipped.
        let graph = build_test_graph(&[(0, 2, 10), (0, 1, 1), (1, 2, 1)]);
        let mut probe = probe();
        ShortestPath::run(&graph, DijkstraConfig { source: 0, target: 2 }, &mut probe).unwrap();
        assert_eq!(probe.units(), 3);
    }

    #[test]
    fn test_dijkstra_parallel_edges_use_cheapest() {
        let graph = build_test_graph(&[(0, 1, 7), (0, 1, 2), (0, 1, 5)]);
        let result = run(&graph, 0, 1).unwrap();
        assert_eq!(result.distance, 2);
    }

    #[test]
    fn test_dijkstra_zero_weight_cycle() {
        let graph = build_test_graph(&[(0, 1, 0), (1, 0, 0), (1, 2, 3)]);
        let result = run(&graph, 0, 2).unwrap();
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.distance, 3);
    }

    #[test]
    fn test_dijkstra_rejects_invalid_node() {
        let graph = build_test_graph(&[(0, 1, 1)]);
        let err = run(&graph, 0, 2).unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidNode {
                id: 2,
                node_bound: 2
            }
        ));
    }

    #[test]
    fn test_dijkstra_rejects_reachable_negative_weight() {
        let graph = build_test_graph(&[(0, 1, 2), (1, 2, -1)]);
        let err = run(&graph, 0, 2).unwrap_err();
        assert!(matches!(
            err,
            GraphError::UnsupportedWeight {
                from: 1,
                to: 2,
                weight: -1
            }
        ));
    }

    #[test]
    fn test_dijkstra_ignores_unreachable_negative_weight() {
        let graph = build_test_graph(&[(0, 1, 2), (3, 2, -1)]);
        let result = run(&graph, 0, 1).unwrap();
        assert_eq!(result.distance, 2);
    }
}
