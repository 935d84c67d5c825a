// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod algo;

pub use algo::algorithms::{
    Algorithm, ComponentsResult, DijkstraConfig, DijkstraResult, FlowPath, FordFulkerson,
    FordFulkersonConfig, FordFulkersonResult, MinimumSpanningForest, MstConfig, MstResult,
    ReachabilityComponents, ReachabilityConfig, ShortestPath,
};
pub use algo::telemetry::{Measured, Probe, Telemetry, TelemetryRegistry, measure};
pub use algo::{Analyzer, DisjointSet, report};
