/// Seeded graph generators
///
/// Supported shapes:
/// - Uniform random graphs with a target average degree
/// - Square grids
/// - Complete trees

use crate::types::{Weight, WeightedGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

/// Random graph generator
///
/// Vertices are numbered `0..n`. The same seed always produces the same
/// graph, including edge insertion order.
pub struct GraphGenerator {
    rng: StdRng,
}

impl GraphGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn weight(&mut self, max_weight: Weight) -> Weight {
        self.rng.gen_range(0..=max_weight)
    }

    /// Generate uniform random graph (Erdős-Rényi-like with fixed average degree)
    ///
    /// No self-loops or parallel edges. Weights are drawn from `0..=max_weight`.
    pub fn uniform(&mut self, n: usize, avg_degree: usize, max_weight: Weight) -> WeightedGraph<usize> {
        let mut graph = WeightedGraph::new();
        for i in 0..n {
            graph.add_vertex(i);
        }
        if n < 2 {
            return graph;
        }

        let max_edges = n * (n - 1) / 2;
        let num_edges = ((n * avg_degree) / 2).min(max_edges);
        let mut edge_set = HashSet::new();

        let mut attempts = 0;
        let max_attempts = num_edges * 10;

        while edge_set.len() < num_edges && attempts < max_attempts {
            let start = self.rng.gen_range(0..n);
            let end = self.rng.gen_range(0..n);
            attempts += 1;

            if start == end {
                continue;
            }
            let key = (start.min(end), start.max(end));
            if edge_set.insert(key) {
                let weight = self.weight(max_weight);
                graph.add_edge(start, end, weight);
            }
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "Generated uniform graph"
        );
        graph
    }

    /// Generate a `size` x `size` grid; vertex `r * size + c` sits at row r, column c
    pub fn grid(&mut self, size: usize, max_weight: Weight) -> WeightedGraph<usize> {
        let mut graph = WeightedGraph::new();

        for row in 0..size {
            for col in 0..size {
                let id = row * size + col;
                graph.add_vertex(id);

                if col + 1 < size {
                    let weight = self.weight(max_weight);
                    graph.add_edge(id, id + 1, weight);
                }
                if row + 1 < size {
                    let weight = self.weight(max_weight);
                    graph.add_edge(id, id + size, weight);
                }
            }
        }

        debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), "Generated grid");
        graph
    }

    /// Generate a complete tree rooted at vertex 0
    ///
    /// `depth` counts levels below the root; depth 0 is a single vertex.
    pub fn tree(&mut self, depth: usize, branching: usize, max_weight: Weight) -> WeightedGraph<usize> {
        let mut graph = WeightedGraph::new();
        graph.add_vertex(0);

        let mut level = vec![0usize];
        let mut next_id = 1usize;

        for _ in 0..depth {
            let mut next_level = Vec::with_capacity(level.len() * branching);
            for &parent in &level {
                for _ in 0..branching {
                    let weight = self.weight(max_weight);
                    graph.add_edge(parent, next_id, weight);
                    next_level.push(next_id);
                    next_id += 1;
                }
            }
            level = next_level;
        }

        debug!(vertices = graph.vertex_count(), "Generated tree");
        graph
    }
}
