// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use graphlens_common::GraphStore;

/// Small graph exercising every analysis edge case:
/// a weighted main component, an isolated node, an isolated pair and a self-loop.
pub fn reference_graph() -> GraphStore {
    let mut graph = GraphStore::new();

    // Main component
    graph.add_edge(0, 1, 4);
    graph.add_edge(0, 2, 3);
    graph.add_edge(1, 2, 1);
    graph.add_edge(1, 3, 5);

    graph.add_node(5);
    graph.add_edge(6, 7, 2);
    graph.add_edge(8, 8, 1);

    graph
}
