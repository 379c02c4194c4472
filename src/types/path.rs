use super::{VertexId, WeightedGraph, Weight};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for WeightedPath operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("Path is empty")]
    EmptyPath,

    #[error("Path discontinuity at position {pos}: no edge between {from} and {to}")]
    MissingEdge { pos: usize, from: String, to: String },

    #[error("Path cost mismatch: recorded {recorded}, edges sum to {actual}")]
    CostMismatch { recorded: Weight, actual: Weight },
}

/// WeightedPath represents a path through a weighted graph
///
/// Invariants:
/// - vertices is non-empty
/// - consecutive vertices are adjacent in the graph the path came from
/// - cost is the sum of the lightest edge between each consecutive pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedPath<V> {
    /// Vertices from source to target
    pub vertices: Vec<V>,

    /// Total weight of the path
    pub cost: Weight,
}

impl<V: VertexId> WeightedPath<V> {
    /// Create a path consisting of a single vertex
    pub fn new(start: V) -> Self {
        Self {
            vertices: vec![start],
            cost: 0,
        }
    }

    /// Create a path from its parts without checking it against a graph
    pub fn from_parts(vertices: Vec<V>, cost: Weight) -> Result<Self, PathError> {
        if vertices.is_empty() {
            return Err(PathError::EmptyPath);
        }
        Ok(Self { vertices, cost })
    }

    /// Validate the path against the graph it was computed on
    pub fn validate(&self, graph: &WeightedGraph<V>) -> Result<(), PathError> {
        if self.vertices.is_empty() {
            return Err(PathError::EmptyPath);
        }

        let mut actual: Weight = 0;
        for (pos, pair) in self.vertices.windows(2).enumerate() {
            let weight = graph
                .edge_weight(&pair[0], &pair[1])
                .ok_or_else(|| PathError::MissingEdge {
                    pos,
                    from: format!("{:?}", pair[0]),
                    to: format!("{:?}", pair[1]),
                })?;
            actual = actual.saturating_add(weight);
        }

        if actual != self.cost {
            return Err(PathError::CostMismatch {
                recorded: self.cost,
                actual,
            });
        }

        Ok(())
    }

    /// Get the start vertex of the path
    pub fn start(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// Get the end vertex of the path
    pub fn end(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Number of edges in the path
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// A single-vertex path has no edges
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }
}
