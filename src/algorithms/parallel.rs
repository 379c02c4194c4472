/// Parallel shortest-path runs
///
/// This module runs independent single-source searches from many sources
/// using rayon for multi-threaded execution. Each search owns its own
/// state; the graph is shared read-only between workers.

use super::shortest_path::{dijkstra, ShortestPaths};
use super::AlgorithmResult;
use crate::types::{Distance, VertexId, WeightedGraph};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// All-pairs distances in matrix form
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<V> {
    /// Row and column labels, in ascending order
    pub vertices: Vec<V>,
    /// Row-major distances; `rows[i][j]` is the distance from vertex i to j
    pub rows: Vec<Vec<Distance>>,
}

impl<V: VertexId> DistanceMatrix<V> {
    /// Distance between two vertices, if both are labelled in the matrix
    pub fn get(&self, from: &V, to: &V) -> Option<Distance> {
        let i = self.vertices.binary_search(from).ok()?;
        let j = self.vertices.binary_search(to).ok()?;
        Some(self.rows[i][j])
    }
}

/// Run Dijkstra from each of the given sources in parallel
///
/// # Arguments
/// * `graph` - Graph to search
/// * `sources` - Start vertices; duplicates collapse to one entry
///
/// # Returns
/// * Map from source to its shortest-path result
/// * `Err(AlgorithmError::InvalidArgument)` if any source is not in the graph
pub fn shortest_paths_from_sources<V>(
    graph: &WeightedGraph<V>,
    sources: &[V],
) -> AlgorithmResult<HashMap<V, ShortestPaths<V>>>
where
    V: VertexId + Send + Sync,
{
    debug!(sources = sources.len(), "Running parallel shortest paths");

    sources
        .par_iter()
        .map(|source| dijkstra(graph, source).map(|paths| (source.clone(), paths)))
        .collect()
}

/// Run Dijkstra from every vertex of the graph in parallel
pub fn shortest_paths_from_all<V>(
    graph: &WeightedGraph<V>,
) -> AlgorithmResult<HashMap<V, ShortestPaths<V>>>
where
    V: VertexId + Send + Sync,
{
    let sources: Vec<V> = graph.vertices().cloned().collect();
    shortest_paths_from_sources(graph, &sources)
}

/// Compute the all-pairs distance matrix
pub fn distance_matrix<V>(graph: &WeightedGraph<V>) -> AlgorithmResult<DistanceMatrix<V>>
where
    V: VertexId + Send + Sync,
{
    let vertices: Vec<V> = graph.vertices().cloned().collect();

    let rows = vertices
        .par_iter()
        .map(|source| -> AlgorithmResult<Vec<Distance>> {
            let paths = dijkstra(graph, source)?;
            Ok(vertices.iter().map(|target| paths.distance(target)).collect())
        })
        .collect::<AlgorithmResult<Vec<_>>>()?;

    Ok(DistanceMatrix { vertices, rows })
}
