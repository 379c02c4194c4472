/// Core data types for the shortest-path engine
///
/// This module defines the fundamental types used throughout the crate:
/// - VertexId: bound satisfied by any usable vertex identifier
/// - Distance: finite path cost or infinity
/// - Edge: undirected weighted edge as it was added
/// - WeightedGraph: vertex set plus mirrored adjacency lists
/// - WeightedPath: sequence of vertices with its total cost

pub mod distance;
pub mod edge;
pub mod graph;
pub mod path;

pub use distance::Distance;
pub use edge::Edge;
pub use graph::WeightedGraph;
pub use path::{PathError, WeightedPath};

use std::fmt::Debug;
use std::hash::Hash;

/// Edge weight. Unsigned, so every weight is non-negative.
pub type Weight = u64;

/// Identifier of a vertex
///
/// Identifiers must be totally ordered: the priority queue breaks ties
/// between equal distances by comparing vertices.
pub trait VertexId: Clone + Eq + Hash + Ord + Debug {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Ord + Debug {}
