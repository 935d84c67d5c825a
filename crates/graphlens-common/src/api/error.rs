// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::graph::store::{NodeId, Weight};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GraphError {
    /// A query referenced an id outside `[0, node_bound)`.
    #[error("Invalid node {id}: expected an id below the node bound {node_bound}")]
    InvalidNode { id: NodeId, node_bound: usize },

    /// Negative weight reachable from a shortest-path start node.
    #[error("Unsupported weight {weight} on edge {from} -> {to}: weights must be non-negative")]
    UnsupportedWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },

    /// A running total (flow value, residual capacity, forest weight) left the `i64` range.
    #[error("Integer overflow while computing {quantity}")]
    Overflow { quantity: String },

    #[error("Argument '{arg}' is invalid: {message}")]
    InvalidArgument { arg: String, message: String },

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
