/// Weighted Paths
///
/// Single-source shortest paths over undirected weighted graphs.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │           Weighted Paths                         │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │   WeightedGraph                │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Dijkstra (binary heap)       │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Distances + Predecessors     │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Path Reconstruction          │              │
/// │  └────────────────────────────────┘              │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Core data types (Distance, Edge, WeightedGraph, WeightedPath)
/// - `algorithms`: Dijkstra, path reconstruction, parallel multi-source runs
/// - `tools`: Seeded graph generators

pub mod algorithms;
pub mod tools;
pub mod types;

// Re-export commonly used types
pub use types::{Distance, Edge, PathError, VertexId, Weight, WeightedGraph, WeightedPath};

// Re-export algorithm types
pub use algorithms::{
    dijkstra, dijkstra_with, distance_matrix, reconstruct_path, shortest_path,
    shortest_paths_from_all, shortest_paths_from_sources, AlgorithmError, AlgorithmResult,
    DistanceMap, DistanceMatrix, PredecessorMap, SearchOptions, ShortestPaths,
};

// Re-export tool types
pub use tools::GraphGenerator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
