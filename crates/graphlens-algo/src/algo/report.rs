// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Human-readable summaries of graphs, analysis results and telemetry.

use crate::algo::algorithms::{ComponentsResult, DijkstraResult, FordFulkersonResult, MstResult};
use crate::algo::telemetry::TelemetryRegistry;
use graphlens_common::{GraphStore, NodeId};

fn join_nodes(nodes: &[NodeId], sep: &str) -> String {
    nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

fn labelled(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|n| format!("Node {}", n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Node/edge totals followed by every adjacency list.
pub fn graph_structure(graph: &GraphStore) -> String {
    let mut out = format!(
        "Graph has {} nodes and {} edges.\nAdjacency List:\n",
        graph.node_count(),
        graph.edge_count()
    );
    for (node, edges) in graph.adjacency() {
        let listed = edges
            .iter()
            .map(|(to, w)| format!("(Node {}, Weight {})", to, w))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("Node {} -> [{}]\n", node, listed));
    }
    out
}

pub fn shortest_path(result: &DijkstraResult) -> String {
    if result.path.is_empty() {
        return format!(
            "No path exists between Node {} and Node {}\n",
            result.source, result.target
        );
    }
    format!(
        "Shortest path from Node {} to Node {}: {}\nTotal Path Weight: {}\n",
        result.source,
        result.target,
        join_nodes(&result.path, " -> "),
        result.distance
    )
}

/// Connected communities, then isolated nodes, then nodes carrying a self-loop.
pub fn components(graph: &GraphStore, result: &ComponentsResult) -> String {
    let mut out = format!("Communities found: {}\n", result.component_count());

    for (i, community) in result.connected().iter().enumerate() {
        out.push_str(&format!(
            "Community {} [size={}]: [{}]\n",
            i + 1,
            community.len(),
            labelled(community)
        ));
    }

    if !result.isolated.is_empty() {
        out.push_str(&format!(
            "\nIsolated Nodes [{}]: [{}]\n",
            result.isolated.len(),
            labelled(&result.isolated)
        ));
    }

    out.push_str(&format!(
        "\nSelf-loop Nodes: [{}]\n",
        labelled(&graph.self_loop_nodes())
    ));
    out
}

pub fn max_flow(result: &FordFulkersonResult) -> String {
    let mut out = format!(
        "Maximum Flow from Node {} to Node {}: {}\nPaths contributing to max flow:\n",
        result.source, result.sink, result.max_flow
    );
    for path in &result.paths {
        out.push_str(&format!(
            "{} (Flow {})\n",
            join_nodes(&path.nodes, " -> "),
            path.flow
        ));
    }
    out
}

pub fn spanning_forest(result: &MstResult) -> String {
    let mut out = String::from("Minimum Spanning Tree:\n");
    for (u, v, w) in &result.edges {
        out.push_str(&format!("  (Node {}, Node {}, Weight {})\n", u, v, w));
    }
    out.push_str(&format!("Total MST Weight: {}\n", result.total_weight));
    out
}

/// Seconds with millisecond precision, memory delta in KB.
pub fn performance(telemetry: &TelemetryRegistry) -> String {
    let mut out = String::from("Performance Metrics:\n");
    for (operation, record) in telemetry.iter() {
        out.push_str(&format!(
            "{} Performance:\n  Execution Time: {:.3} seconds\n  Nodes Processed: {}\n  Memory Used: {:.2} KB\n",
            operation,
            record.elapsed.as_secs_f64(),
            record.units_processed,
            record.memory_delta as f64 / 1024.0
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::algorithms::FlowPath;
    use crate::algo::telemetry::Telemetry;
    use crate::algo::test_utils::build_test_graph;
    use graphlens_common::INFINITE_DISTANCE;
    use std::time::Duration;

    #[test]
    fn test_graph_structure() {
        let mut graph = build_test_graph(&[(0, 1, 4), (0, 2, 3)]);
        graph.add_node(5);
        let text = graph_structure(&graph);
        assert_eq!(
            text,
            "Graph has 4 nodes and 2 edges.\nAdjacency List:\n\
             Node 0 -> [(Node 1, Weight 4), (Node 2, Weight 3)]\n\
             Node 1 -> []\nNode 2 -> []\nNode 5 -> []\n"
        );
    }

    #[test]
    fn test_shortest_path_text() {
        let found = DijkstraResult {
            source: 0,
            target: 3,
            path: vec![0, 1, 3],
            distance: 9,
            distances: vec![],
        };
        assert_eq!(
            shortest_path(&found),
            "Shortest path from Node 0 to Node 3: 0 -> 1 -> 3\nTotal Path Weight: 9\n"
        );

        let missing = DijkstraResult {
            path: vec![],
            distance: INFINITE_DISTANCE,
            ..found
        };
        assert_eq!(
            shortest_path(&missing),
            "No path exists between Node 0 and Node 3\n"
        );
    }

    #[test]
    fn test_components_text() {
        let mut graph = build_test_graph(&[(0, 1, 1), (8, 8, 1)]);
        graph.add_node(5);
        let result = ComponentsResult {
            components: vec![vec![0, 1], vec![8], vec![5]],
            isolated: vec![5],
        };
        assert_eq!(
            components(&graph, &result),
            "Communities found: 3\n\
             Community 1 [size=2]: [Node 0, Node 1]\n\
             Community 2 [size=1]: [Node 8]\n\
             \nIsolated Nodes [1]: [Node 5]\n\
             \nSelf-loop Nodes: [Node 8]\n"
        );
    }

    #[test]
    fn test_max_flow_text() {
        let result = FordFulkersonResult {
            source: 0,
            sink: 1,
            max_flow: 12,
            paths: vec![
                FlowPath {
                    nodes: vec![0, 1],
                    flow: 10,
                },
                FlowPath {
                    nodes: vec![0, 2, 1],
                    flow: 2,
                },
            ],
        };
        assert_eq!(
            max_flow(&result),
            "Maximum Flow from Node 0 to Node 1: 12\nPaths contributing to max flow:\n\
             0 -> 1 (Flow 10)\n0 -> 2 -> 1 (Flow 2)\n"
        );
    }

    #[test]
    fn test_spanning_forest_text() {
        let result = MstResult {
            edges: vec![(1, 2, 1), (0, 2, 3)],
            total_weight: 4,
        };
        assert_eq!(
            spanning_forest(&result),
            "Minimum Spanning Tree:\n  (Node 1, Node 2, Weight 1)\n  (Node 0, Node 2, Weight 3)\nTotal MST Weight: 4\n"
        );
    }

    #[test]
    fn test_performance_text() {
        let mut registry = TelemetryRegistry::new();
        registry.record(
            "Maximum Flow",
            Telemetry {
                elapsed: Duration::from_millis(1500),
                units_processed: 5,
                memory_delta: -2048,
            },
        );
        assert_eq!(
            performance(&registry),
            "Performance Metrics:\nMaximum Flow Performance:\n  Execution Time: 1.500 seconds\n  Nodes Processed: 5\n  Memory Used: -2.00 KB\n"
        );
    }
}
