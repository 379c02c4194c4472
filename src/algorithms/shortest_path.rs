/// Shortest path algorithms
///
/// Implements Dijkstra's algorithm for single-source shortest paths over a
/// `WeightedGraph`, plus path reconstruction from the predecessor map.

use super::{AlgorithmError, AlgorithmResult};
use crate::types::{Distance, VertexId, Weight, WeightedGraph, WeightedPath};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use tracing::{debug, trace};

/// Best-known distance from the source, for every vertex of the graph
pub type DistanceMap<V> = HashMap<V, Distance>;

/// Vertex each vertex was last reached from; `None` for the source and
/// unreached vertices
pub type PredecessorMap<V> = HashMap<V, Option<V>>;

/// Search options
#[derive(Debug, Clone)]
pub struct SearchOptions<V> {
    /// Stop as soon as this vertex is settled
    pub target: Option<V>,
    /// Do not record distances above this bound
    pub max_distance: Option<Weight>,
}

impl<V> Default for SearchOptions<V> {
    fn default() -> Self {
        Self {
            target: None,
            max_distance: None,
        }
    }
}

impl<V> SearchOptions<V> {
    pub fn with_target(mut self, target: V) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_max_distance(mut self, max_distance: Weight) -> Self {
        self.max_distance = Some(max_distance);
        self
    }
}

/// Result of a single-source computation
///
/// `distances` and `predecessors` cover every vertex of the graph. When the
/// search stopped early (see `SearchOptions`), distances of vertices that
/// were reached but not settled are upper bounds.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "V: Serialize"))]
pub struct ShortestPaths<V> {
    source: V,
    distances: DistanceMap<V>,
    predecessors: PredecessorMap<V>,
    /// Vertices in the order they were settled, with their final distance
    settled: Vec<(V, Weight)>,
}

impl<V: VertexId> PartialEq for ShortestPaths<V> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.distances == other.distances
            && self.predecessors == other.predecessors
            && self.settled == other.settled
    }
}

impl<V: VertexId> ShortestPaths<V> {
    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn distances(&self) -> &DistanceMap<V> {
        &self.distances
    }

    pub fn predecessors(&self) -> &PredecessorMap<V> {
        &self.predecessors
    }

    /// Distance to a vertex; `Infinite` for unreached or unknown vertices
    pub fn distance(&self, vertex: &V) -> Distance {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(Option::as_ref)
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_finite()
    }

    /// Vertices with a finite distance, in ascending order
    pub fn reachable(&self) -> Vec<&V> {
        let mut vertices: Vec<&V> = self
            .distances
            .iter()
            .filter(|(_, distance)| distance.is_finite())
            .map(|(vertex, _)| vertex)
            .collect();
        vertices.sort();
        vertices
    }

    /// Vertices in the order their distance became final
    pub fn settle_order(&self) -> &[(V, Weight)] {
        &self.settled
    }

    /// Vertex sequence from the source to `target`
    pub fn path(&self, target: &V) -> Option<Vec<V>> {
        reconstruct_path(&self.predecessors, &self.source, target)
    }

    /// Path from the source to `target` together with its cost
    pub fn path_to(&self, target: &V) -> Option<WeightedPath<V>> {
        let cost = self.distance(target).value()?;
        let vertices = self.path(target)?;
        Some(WeightedPath { vertices, cost })
    }

    pub fn into_parts(self) -> (DistanceMap<V>, PredecessorMap<V>) {
        (self.distances, self.predecessors)
    }
}

/// Node in priority queue for Dijkstra's algorithm
#[derive(Debug, Clone, Eq, PartialEq)]
struct DijkstraNode<V> {
    vertex: V,
    cost: Weight,
}

impl<V: Ord> Ord for DijkstraNode<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap; equal costs pop the smaller vertex first
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<V: Ord> PartialOrd for DijkstraNode<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute shortest distances and predecessors from `source`
///
/// # Arguments
/// * `graph` - Graph to search; only read
/// * `source` - Start vertex
///
/// # Returns
/// * `Ok(ShortestPaths)` - Distances and predecessors for every vertex
/// * `Err(AlgorithmError::InvalidArgument)` - `source` is not in the graph
pub fn dijkstra<V: VertexId>(
    graph: &WeightedGraph<V>,
    source: &V,
) -> AlgorithmResult<ShortestPaths<V>> {
    dijkstra_with(graph, source, &SearchOptions::default())
}

/// Dijkstra's algorithm with search options
///
/// The queue has no decrease-key: an improved distance pushes a new entry
/// and older entries for the same vertex are skipped when popped.
pub fn dijkstra_with<V: VertexId>(
    graph: &WeightedGraph<V>,
    source: &V,
    options: &SearchOptions<V>,
) -> AlgorithmResult<ShortestPaths<V>> {
    if !graph.contains_vertex(source) {
        return Err(AlgorithmError::InvalidArgument(format!(
            "Source vertex {:?} not found",
            source
        )));
    }

    debug!(
        ?source,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Running Dijkstra"
    );

    let mut distances: DistanceMap<V> = graph
        .vertices()
        .map(|v| (v.clone(), Distance::Infinite))
        .collect();
    let mut predecessors: PredecessorMap<V> =
        graph.vertices().map(|v| (v.clone(), None)).collect();
    let mut visited: HashSet<V> = HashSet::new();
    let mut settled: Vec<(V, Weight)> = Vec::new();
    let mut heap = BinaryHeap::new();
    let mut stale = 0usize;

    // Initialize
    distances.insert(source.clone(), Distance::ZERO);
    heap.push(DijkstraNode {
        vertex: source.clone(),
        cost: 0,
    });

    while let Some(DijkstraNode { vertex, cost }) = heap.pop() {
        // Superseded by an earlier, cheaper entry
        if !visited.insert(vertex.clone()) {
            stale += 1;
            continue;
        }

        trace!(?vertex, cost, "Settled");
        settled.push((vertex.clone(), cost));

        if options.target.as_ref() == Some(&vertex) {
            break;
        }

        for (neighbor, weight) in graph.neighbors(&vertex) {
            if visited.contains(neighbor) {
                continue;
            }

            let Distance::Finite(new_cost) = Distance::Finite(cost) + *weight else {
                continue;
            };

            if options.max_distance.is_some_and(|limit| new_cost > limit) {
                continue;
            }

            let current = distances
                .get(neighbor)
                .copied()
                .unwrap_or(Distance::Infinite);

            if Distance::Finite(new_cost) < current {
                trace!(?neighbor, from = ?vertex, new_cost, "Relaxed");
                distances.insert(neighbor.clone(), Distance::Finite(new_cost));
                predecessors.insert(neighbor.clone(), Some(vertex.clone()));
                heap.push(DijkstraNode {
                    vertex: neighbor.clone(),
                    cost: new_cost,
                });
            }
        }
    }

    debug!(settled = settled.len(), stale, "Dijkstra finished");

    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
        settled,
    })
}

/// Reconstruct the path from `source` to `target` using a predecessor map
///
/// Returns `None` when the walk back from `target` does not end at
/// `source`, so callers never see a partial path. A target missing from
/// the map is treated as having no predecessor.
pub fn reconstruct_path<V: VertexId>(
    predecessors: &PredecessorMap<V>,
    source: &V,
    target: &V,
) -> Option<Vec<V>> {
    let mut path = vec![target.clone()];
    let mut current = target;

    // Walk backwards from target
    while let Some(Some(prev)) = predecessors.get(current) {
        path.push(prev.clone());
        // A chain longer than the map can only come from a cycle
        if path.len() > predecessors.len() + 1 {
            return None;
        }
        current = prev;
    }

    // Reverse to get source -> target order
    path.reverse();

    if path.first() == Some(source) {
        Some(path)
    } else {
        None
    }
}

/// Find the shortest path between two vertices
///
/// # Returns
/// * `Ok(WeightedPath)` - Shortest path found
/// * `Err(AlgorithmError::InvalidArgument)` - Either endpoint is missing
/// * `Err(AlgorithmError::PathNotFound)` - No path exists
pub fn shortest_path<V: VertexId>(
    graph: &WeightedGraph<V>,
    source: &V,
    target: &V,
) -> AlgorithmResult<WeightedPath<V>> {
    if !graph.contains_vertex(target) {
        return Err(AlgorithmError::InvalidArgument(format!(
            "Target vertex {:?} not found",
            target
        )));
    }

    let options = SearchOptions::default().with_target(target.clone());
    let paths = dijkstra_with(graph, source, &options)?;

    paths.path_to(target).ok_or_else(|| {
        AlgorithmError::PathNotFound(format!("{:?}", source), format!("{:?}", target))
    })
}
