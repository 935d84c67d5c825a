// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Union-Find (Disjoint Set) over a fixed id range.
//!
//! Union by rank with path compression. Both `find` and `union` are iterative,
//! so long parent chains cannot exhaust the stack.

use graphlens_common::NodeId;

/// Disjoint-set forest sized at construction.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent pointers (parent[i] == i for roots)
    parent: Vec<NodeId>,
    /// Upper bound on tree height, only meaningful for roots
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Create `n` singleton sets `{0}, {1}, ..., {n-1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `x`'s set. Every node on the walked path is
    /// re-pointed directly at the root.
    ///
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns false (and changes nothing beyond path compression) if they
    /// were already in the same set.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        true
    }

    #[cfg(test)]
    fn rank(&self, x: NodeId) -> u32 {
        self.rank[x]
    }
}
