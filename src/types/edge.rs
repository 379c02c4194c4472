use super::Weight;
use serde::{Deserialize, Serialize};

/// Undirected weighted edge
///
/// Stored in the order it was added. `from`/`to` only record which endpoint
/// was passed first; traversal treats the edge as symmetric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge<V> {
    /// First endpoint
    pub from: V,

    /// Second endpoint
    pub to: V,

    /// Non-negative cost of crossing the edge
    pub weight: Weight,
}

impl<V: PartialEq> Edge<V> {
    /// Create a new edge
    pub fn new(from: V, to: V, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Check if the edge touches a vertex
    pub fn touches(&self, vertex: &V) -> bool {
        &self.from == vertex || &self.to == vertex
    }

    /// Check if the edge joins two vertices, in either direction
    pub fn connects(&self, a: &V, b: &V) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }

    /// Endpoint opposite to `vertex`, if the edge touches it
    pub fn other(&self, vertex: &V) -> Option<&V> {
        if &self.from == vertex {
            Some(&self.to)
        } else if &self.to == vertex {
            Some(&self.from)
        } else {
            None
        }
    }

    /// Check for a self-loop
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}
