// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::algo::telemetry::Probe;
use graphlens_common::{GraphStore, NodeId, Weight};

pub fn build_test_graph(edges: &[(NodeId, NodeId, Weight)]) -> GraphStore {
    GraphStore::from_edges(edges.iter().copied())
}

pub fn probe() -> Probe {
    Probe::default()
}
