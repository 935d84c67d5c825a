// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Directed-Reachability Components ("communities").
//!
//! A component is the set of nodes reachable from a start node by following
//! **outgoing** edges only. This is neither strongly-connected nor undirected
//! connectivity: with edges `0 -> 1` and `2 -> 1`, starting from 0 yields
//! `[0, 1]` and node 2 then forms `[2]` on its own.
//!
//! Registered nodes are scanned in ascending id order. Each unvisited,
//! non-isolated node starts a depth-first traversal; visited marks are global,
//! so no node appears twice. Isolated nodes are appended last as singletons.

use crate::algo::algorithms::Algorithm;
use crate::algo::telemetry::Probe;
use graphlens_common::{GraphStore, NodeId, Result};

pub struct ReachabilityComponents;

#[derive(Debug, Clone, Default)]
pub struct ReachabilityConfig {}

#[derive(Debug, Clone)]
pub struct ComponentsResult {
    /// Components in discovery order, nodes in visit order; isolated singletons last.
    pub components: Vec<Vec<NodeId>>,
    /// Isolated nodes, ascending. Each also appears as a singleton in `components`.
    pub isolated: Vec<NodeId>,
}

impl ComponentsResult {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Components discovered by traversal, excluding isolated singletons.
    pub fn connected(&self) -> &[Vec<NodeId>] {
        &self.components[..self.components.len() - self.isolated.len()]
    }
}

impl Algorithm for ReachabilityComponents {
    type Config = ReachabilityConfig;
    type Result = ComponentsResult;

    fn name() -> &'static str {
        "Community Detection"
    }

    fn run(graph: &GraphStore, _config: Self::Config, probe: &mut Probe) -> Result<Self::Result> {
        let mut visited = vec![false; graph.node_bound()];
        let mut components = Vec::new();

        for node in graph.nodes() {
            if visited[node] || graph.is_isolated(node) {
                continue;
            }
            let component = visit_reachable(graph, node, &mut visited, probe);
            components.push(component);
        }

        let isolated = graph.isolated_nodes();
        components.extend(isolated.iter().map(|&id| vec![id]));

        Ok(ComponentsResult {
            components,
            isolated,
        })
    }
}

/// Iterative pre-order DFS along outgoing edges. Children are explored in edge
/// insertion order, matching a recursive traversal.
fn visit_reachable(
    graph: &GraphStore,
    start: NodeId,
    visited: &mut [bool],
    probe: &mut Probe,
) -> Vec<NodeId> {
    let mut component = vec![start];
    visited[start] = true;
    probe.tick();

    // (node, index of the next outgoing edge to try)
    let mut stack = vec![(start, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        match graph.out_edges(node).get(cursor) {
            Some(&(next, _)) => {
                frame.1 += 1;
                if !visited[next] {
                    visited[next] = true;
                    component.push(next);
                    probe.tick();
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    component
}
