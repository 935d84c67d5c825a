// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod config;

pub mod graph {
    pub mod edge_list;
    pub mod store;
}

// Re-exports for convenience
pub use api::error::{GraphError, Result};
pub use config::AnalyzerConfig;
pub use graph::edge_list::{parse_edge_list, read_edge_list};
pub use graph::store::{GraphStore, INFINITE_DISTANCE, MAX_NODE_ID, NodeId, Weight};
