/// Graph algorithms module
///
/// This module implements single-source shortest paths over a
/// `WeightedGraph` and helpers for running them from many sources.

pub mod parallel;
pub mod shortest_path;

pub use parallel::{distance_matrix, shortest_paths_from_all, shortest_paths_from_sources, DistanceMatrix};
pub use shortest_path::{
    dijkstra, dijkstra_with, reconstruct_path, shortest_path, DistanceMap, PredecessorMap,
    SearchOptions, ShortestPaths,
};

use thiserror::Error;

/// Algorithm errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Path not found between {0} and {1}")]
    PathNotFound(String, String),
}

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;
