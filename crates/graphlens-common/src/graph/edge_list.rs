// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Plain-text edge list loader.
//!
//! One entry per line:
//!
//! ```text
//! # comment
//! 0 1 4     # edge 0 -> 1 with weight 4
//! 1 2       # edge 1 -> 2 with weight 1
//! 5         # isolated node 5
//! ```

use crate::api::error::{GraphError, Result};
use crate::graph::store::{GraphStore, MAX_NODE_ID, NodeId, Weight};
use std::path::Path;

/// Parse an edge list into a new graph. Lines are 1-indexed in errors.
pub fn parse_edge_list(input: &str) -> Result<GraphStore> {
    let mut graph = GraphStore::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [node] => {
                graph.add_node(parse_node(node, line_no)?);
            }
            [from, to] => {
                graph.add_unit_edge(parse_node(from, line_no)?, parse_node(to, line_no)?);
            }
            [from, to, weight] => {
                let weight: Weight = weight.parse().map_err(|_| GraphError::Parse {
                    line: line_no,
                    message: format!("invalid weight '{}'", weight),
                })?;
                graph.add_edge(
                    parse_node(from, line_no)?,
                    parse_node(to, line_no)?,
                    weight,
                );
            }
            _ => {
                return Err(GraphError::Parse {
                    line: line_no,
                    message: format!("expected 1 to 3 fields, got {}", fields.len()),
                });
            }
        }
    }

    Ok(graph)
}

/// Read and parse an edge list file.
pub fn read_edge_list(path: impl AsRef<Path>) -> Result<GraphStore> {
    let contents = std::fs::read_to_string(path)?;
    parse_edge_list(&contents)
}

fn parse_node(field: &str, line: usize) -> Result<NodeId> {
    let id: NodeId = field.parse().map_err(|_| GraphError::Parse {
        line,
        message: format!("invalid node id '{}'", field),
    })?;
    if id > MAX_NODE_ID {
        return Err(GraphError::Parse {
            line,
            message: format!("node id {} exceeds the maximum {}", id, MAX_NODE_ID),
        });
    }
    Ok(id)
}
