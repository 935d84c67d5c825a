// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Analysis Engines
//!
//! Four analyses over a borrowed [`GraphStore`], each measured by the
//! instrumentation recorder:
//!
//! - **Shortest path**: single-pair Dijkstra with lazy deletion.
//! - **Components**: directed-reachability partitioning plus isolated nodes.
//! - **Maximum flow**: Edmonds-Karp over a residual copy of the graph.
//! - **Spanning forest**: Kruskal over every directed edge.
//!
//! # Example
//!
//! ```
//! use graphlens_algo::Analyzer;
//! use graphlens_common::GraphStore;
//!
//! let graph = GraphStore::from_edges([(0, 1, 4), (0, 2, 3), (1, 2, 1), (1, 3, 5)]);
//! let mut analyzer = Analyzer::new(&graph);
//!
//! let result = analyzer.shortest_path(0, 3).unwrap();
//! assert_eq!(result.path, vec![0, 1, 3]);
//! assert_eq!(result.distance, 9);
//! assert!(analyzer.telemetry().get("Shortest Path").is_some());
//! ```
//!
//! [`GraphStore`]: graphlens_common::GraphStore

mod analyzer;
mod disjoint_set;

pub mod algorithms;
pub mod report;
pub mod telemetry;

pub use analyzer::Analyzer;
pub use disjoint_set::DisjointSet;

#[cfg(test)]
pub mod test_utils;
