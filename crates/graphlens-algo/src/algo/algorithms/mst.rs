// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Minimum Spanning Forest (Kruskal's algorithm).
//!
//! Every directed edge is an independent candidate; no symmetrization is done,
//! so callers wanting undirected semantics insert both directions. Candidates
//! are stable-sorted by weight, which makes ties break by graph iteration order
//! (ascending source id, then insertion order). A total weight outside the
//! `i64` range is reported as [`GraphError::Overflow`].

use crate::algo::DisjointSet;
use crate::algo::algorithms::Algorithm;
use crate::algo::telemetry::Probe;
use graphlens_common::{GraphError, GraphStore, NodeId, Result, Weight};

pub struct MinimumSpanningForest;

#[derive(Debug, Clone, Default)]
pub struct MstConfig {}

#[derive(Debug, Clone)]
pub struct MstResult {
    pub edges: Vec<(NodeId, NodeId, Weight)>, // (u, v, weight) in acceptance order
    pub total_weight: Weight,
}

impl Algorithm for MinimumSpanningForest {
    type Config = MstConfig;
    type Result = MstResult;

    fn name() -> &'static str {
        "Minimum Spanning Tree"
    }

    fn run(graph: &GraphStore, _config: Self::Config, probe: &mut Probe) -> Result<Self::Result> {
        let mut candidates: Vec<(NodeId, NodeId, Weight)> = graph.edges().collect();
        candidates.sort_by_key(|&(_, _, weight)| weight);

        let mut sets = DisjointSet::new(graph.node_bound());
        let mut edges = Vec::new();
        let mut total_weight: Weight = 0;

        for (u, v, w) in candidates {
            if sets.union(u, v) {
                edges.push((u, v, w));
                total_weight = total_weight
                    .checked_add(w)
                    .ok_or_else(|| GraphError::Overflow {
                        quantity: "spanning forest weight".to_string(),
                    })?;
                probe.tick();
            }
        }

        Ok(MstResult {
            edges,
            total_weight,
        })
    }
}
