use super::{Edge, VertexId, Weight};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

/// Undirected weighted graph
///
/// Holds a vertex set and, per vertex, the list of `(neighbor, weight)`
/// pairs in the order edges were added. Every edge is mirrored: adding
/// `(u, v, w)` appends `(v, w)` to `u` and `(u, w)` to `v`.
///
/// Duplicate edges are kept as parallel edges. Weights are `u64`, so the
/// non-negativity Dijkstra relies on holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize",
    deserialize = "V: Deserialize<'de> + Ord + Hash"
))]
pub struct WeightedGraph<V> {
    /// All vertices, including isolated ones
    vertices: BTreeSet<V>,

    /// Mirrored adjacency lists
    adjacency: HashMap<V, Vec<(V, Weight)>>,

    /// Edges as added
    edges: Vec<Edge<V>>,
}

impl<V: VertexId> PartialEq for WeightedGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
            && self.adjacency == other.adjacency
            && self.edges == other.edges
    }
}

impl<V: VertexId> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> WeightedGraph<V> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            vertices: BTreeSet::new(),
            adjacency: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Build a graph from `(u, v, weight)` triples
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, Weight)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Add a vertex. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: V) {
        self.vertices.insert(vertex);
    }

    /// Add an undirected edge, inserting missing endpoints
    pub fn add_edge(&mut self, from: V, to: V, weight: Weight) {
        self.vertices.insert(from.clone());
        self.vertices.insert(to.clone());

        self.adjacency
            .entry(from.clone())
            .or_default()
            .push((to.clone(), weight));
        self.adjacency
            .entry(to.clone())
            .or_default()
            .push((from.clone(), weight));

        self.edges.push(Edge::new(from, to, weight));
    }

    /// Neighbors of a vertex with edge weights, in insertion order
    ///
    /// Empty for unknown vertices and vertices without edges.
    pub fn neighbors(&self, vertex: &V) -> &[(V, Weight)] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Vertices in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Edges in insertion order, each undirected edge once
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Lightest edge between two vertices, if they are adjacent
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<Weight> {
        self.neighbors(from)
            .iter()
            .filter(|(neighbor, _)| neighbor == to)
            .map(|(_, weight)| *weight)
            .min()
    }
}
