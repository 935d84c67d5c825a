// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Core algorithm trait and the analysis engines.

use crate::algo::telemetry::Probe;
use graphlens_common::{GraphStore, Result};

/// Core trait for all graph algorithms.
pub trait Algorithm {
    /// Algorithm parameters.
    type Config: Default + Clone;
    /// Result type.
    type Result;

    /// Operation name; telemetry for the latest run is stored under it.
    fn name() -> &'static str;

    /// Execute the algorithm, counting processed units on `probe`.
    fn run(graph: &GraphStore, config: Self::Config, probe: &mut Probe) -> Result<Self::Result>;
}

mod dijkstra;
pub use dijkstra::{DijkstraConfig, DijkstraResult, ShortestPath};

mod components;
pub use components::{ComponentsResult, ReachabilityComponents, ReachabilityConfig};

mod ford_fulkerson;
pub use ford_fulkerson::{FlowPath, FordFulkerson, FordFulkersonConfig, FordFulkersonResult};

mod mst;
pub use mst::{MinimumSpanningForest, MstConfig, MstResult};
