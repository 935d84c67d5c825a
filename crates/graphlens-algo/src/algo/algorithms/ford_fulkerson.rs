// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Ford-Fulkerson Algorithm (Edmonds-Karp implementation).
//!
//! Computes maximum flow from source to sink using BFS to find augmenting paths,
//! and reports every augmenting path with the flow it contributed.
//!
//! The residual table holds one capacity per ordered node pair. Parallel edges
//! overwrite instead of accumulating: for `0 -> 1 (5)` followed by `0 -> 1 (3)`
//! the usable capacity is 3, not 8.

use crate::algo::algorithms::Algorithm;
use crate::algo::telemetry::Probe;
use fxhash::FxHashMap;
use graphlens_common::{GraphError, GraphStore, NodeId, Result, Weight};
use std::collections::VecDeque;

pub struct FordFulkerson;

#[derive(Debug, Clone, Default)]
pub struct FordFulkersonConfig {
    pub source: NodeId,
    pub sink: NodeId,
}

/// One augmenting path and the flow pushed along it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowPath {
    pub nodes: Vec<NodeId>,
    pub flow: Weight,
}

#[derive(Debug, Clone)]
pub struct FordFulkersonResult {
    pub source: NodeId,
    pub sink: NodeId,
    pub max_flow: Weight,
    /// Augmenting paths in the order they were applied.
    pub paths: Vec<FlowPath>,
}

/// Residual capacities keyed by ordered pair, with per-node arcs kept in
/// first-insertion order so BFS exploration is reproducible.
struct ResidualGraph {
    arcs: Vec<Vec<(NodeId, Weight)>>,
    /// (u, v) -> index of v in arcs[u]
    slots: FxHashMap<(NodeId, NodeId), usize>,
}

impl ResidualGraph {
    fn from_graph(graph: &GraphStore) -> Self {
        let mut residual = Self {
            arcs: vec![Vec::new(); graph.node_bound()],
            slots: FxHashMap::default(),
        };
        for (u, v, capacity) in graph.edges() {
            *residual.arc_mut(u, v) = capacity;
        }
        residual
    }

    fn arc_mut(&mut self, u: NodeId, v: NodeId) -> &mut Weight {
        let arcs = &mut self.arcs[u];
        let idx = *self.slots.entry((u, v)).or_insert_with(|| {
            arcs.push((v, 0));
            arcs.len() - 1
        });
        &mut arcs[idx].1
    }

    fn capacity(&self, u: NodeId, v: NodeId) -> Weight {
        self.slots
            .get(&(u, v))
            .map_or(0, |&idx| self.arcs[u][idx].1)
    }

    fn neighbors(&self, u: NodeId) -> &[(NodeId, Weight)] {
        &self.arcs[u]
    }
}

impl Algorithm for FordFulkerson {
    type Config = FordFulkersonConfig;
    type Result = FordFulkersonResult;

    fn name() -> &'static str {
        "Maximum Flow"
    }

    fn run(graph: &GraphStore, config: Self::Config, probe: &mut Probe) -> Result<Self::Result> {
        let FordFulkersonConfig { source, sink } = config;
        graph.check_node(source)?;
        graph.check_node(sink)?;

        if source == sink {
            return Err(GraphError::InvalidArgument {
                arg: "sink".to_string(),
                message: format!("source and sink are both node {}", source),
            });
        }

        let n = graph.node_bound();
        let mut residual = ResidualGraph::from_graph(graph);
        let mut paths = Vec::new();
        let mut max_flow: Weight = 0;

        loop {
            // BFS for augmenting path
            let mut parent: Vec<Option<NodeId>> = vec![None; n];
            parent[source] = Some(source);
            let mut queue = VecDeque::from([source]);

            while parent[sink].is_none() {
                let Some(u) = queue.pop_front() else {
                    break;
                };
                probe.tick();

                for &(v, capacity) in residual.neighbors(u) {
                    if parent[v].is_none() && capacity > 0 {
                        parent[v] = Some(u);
                        queue.push_back(v);
                    }
                }
            }

            if parent[sink].is_none() {
                break;
            }

            let nodes = trace_path(&parent, source, sink);
            let path_flow = nodes
                .windows(2)
                .map(|hop| residual.capacity(hop[0], hop[1]))
                .min()
                .unwrap_or(0);

            // Augment; forward arcs hold at least path_flow, back arcs may overflow
            for hop in nodes.windows(2) {
                let (u, v) = (hop[0], hop[1]);
                *residual.arc_mut(u, v) -= path_flow;
                let back = residual.arc_mut(v, u);
                *back = back
                    .checked_add(path_flow)
                    .ok_or_else(|| overflow("residual capacity"))?;
            }

            max_flow = max_flow
                .checked_add(path_flow)
                .ok_or_else(|| overflow("maximum flow"))?;
            paths.push(FlowPath {
                nodes,
                flow: path_flow,
            });
        }

        Ok(FordFulkersonResult {
            source,
            sink,
            max_flow,
            paths,
        })
    }
}

fn overflow(quantity: &str) -> GraphError {
    GraphError::Overflow {
        quantity: quantity.to_string(),
    }
}

/// Follow parent pointers back from `sink`; returns the path source-first.
fn trace_path(parent: &[Option<NodeId>], source: NodeId, sink: NodeId) -> Vec<NodeId> {
    let mut path = vec![sink];
    let mut v = sink;
    while v != source {
        match parent[v] {
            Some(u) => {
                path.push(u);
                v = u;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
