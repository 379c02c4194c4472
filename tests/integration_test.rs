/// End-to-end tests of the shortest-path engine
///
/// Builds graphs through the public API, runs the engine and checks
/// distances, predecessor trees and reconstructed paths.

mod common;

use common::{init_tracing, sample_graph};
use weighted_paths::{
    dijkstra, reconstruct_path, shortest_path, AlgorithmError, Distance, GraphGenerator,
    ShortestPaths, WeightedGraph,
};

/// Test the worked example from both demo sources
#[test]
fn test_sample_graph_from_a_and_d() {
    init_tracing();
    let graph = sample_graph();

    let from_a = dijkstra(&graph, &"A").unwrap();
    let expected_a = [("A", 0), ("B", 3), ("C", 2), ("D", 8), ("E", 10), ("F", 13)];
    for (vertex, distance) in expected_a {
        assert_eq!(from_a.distance(&vertex), Distance::Finite(distance), "A -> {}", vertex);
    }

    let path = from_a.path(&"F").unwrap();
    assert_eq!(path, vec!["A", "C", "B", "D", "E", "F"]);

    let from_d = dijkstra(&graph, &"D").unwrap();
    let expected_d = [("A", 8), ("B", 5), ("C", 6), ("D", 0), ("E", 2), ("F", 5)];
    for (vertex, distance) in expected_d {
        assert_eq!(from_d.distance(&vertex), Distance::Finite(distance), "D -> {}", vertex);
    }
    assert_eq!(from_d.path(&"F").unwrap(), vec!["D", "E", "F"]);
}

/// Test that the predecessor map forms a tree of valid shortest paths
#[test]
fn test_every_path_is_valid_and_tight() {
    init_tracing();
    let graph = GraphGenerator::new(11).uniform(200, 4, 50);
    let paths = dijkstra(&graph, &0).unwrap();

    for vertex in graph.vertices() {
        match paths.path_to(vertex) {
            Some(path) => {
                assert_eq!(path.start(), Some(&0));
                assert_eq!(path.end(), Some(vertex));
                assert!(path.validate(&graph).is_ok(), "invalid path to {}", vertex);
                assert_eq!(Distance::Finite(path.cost), paths.distance(vertex));
            }
            None => {
                assert_eq!(paths.distance(vertex), Distance::Infinite);
                assert_eq!(paths.predecessor(vertex), None);
            }
        }
    }
}

/// Test that no edge can improve a final distance
#[test]
fn test_no_edge_is_relaxable_after_run() {
    init_tracing();
    let graph = GraphGenerator::new(5).grid(12, 9);
    let paths = dijkstra(&graph, &0).unwrap();

    for edge in graph.edges() {
        let a = paths.distance(&edge.from);
        let b = paths.distance(&edge.to);
        assert!(b <= a + edge.weight);
        assert!(a <= b + edge.weight);
    }
}

/// Test that each reachable vertex is settled exactly once with its final distance
#[test]
fn test_settled_once_and_never_changed() {
    init_tracing();
    let graph = GraphGenerator::new(3).uniform(300, 3, 20);
    let paths = dijkstra(&graph, &0).unwrap();

    let mut seen = std::collections::HashSet::new();
    for (vertex, cost) in paths.settle_order() {
        assert!(seen.insert(*vertex), "{} settled twice", vertex);
        assert_eq!(paths.distance(vertex), Distance::Finite(*cost));
    }
    assert_eq!(seen.len(), paths.reachable().len());

    for window in paths.settle_order().windows(2) {
        assert!(window[0].1 <= window[1].1);
    }
}

/// Test that every added edge appears in both adjacency lists
#[test]
fn test_adjacency_symmetry() {
    let graph = GraphGenerator::new(9).uniform(100, 6, 30);

    for edge in graph.edges() {
        assert!(graph.neighbors(&edge.from).contains(&(edge.to, edge.weight)));
        assert!(graph.neighbors(&edge.to).contains(&(edge.from, edge.weight)));
    }
}

/// Test disconnected components
#[test]
fn test_disconnected_components() {
    init_tracing();
    let mut graph = WeightedGraph::new();
    graph.add_edge("a1", "a2", 1);
    graph.add_edge("b1", "b2", 1);
    graph.add_vertex("lonely");

    let paths = dijkstra(&graph, &"a1").unwrap();

    assert_eq!(paths.reachable(), vec![&"a1", &"a2"]);
    assert_eq!(paths.path(&"b2"), None);
    assert_eq!(paths.path(&"lonely"), None);
    assert_eq!(paths.path(&"a1"), Some(vec!["a1"]));

    let err = shortest_path(&graph, &"a1", &"b1").unwrap_err();
    assert_eq!(
        err,
        AlgorithmError::PathNotFound("\"a1\"".to_string(), "\"b1\"".to_string())
    );
    assert_eq!(err.to_string(), "Path not found between \"a1\" and \"b1\"");
}

/// Test that results do not depend on anything but the graph and source
#[test]
fn test_repeated_runs_are_identical() {
    let graph = GraphGenerator::new(21).uniform(500, 5, 3);

    let first: ShortestPaths<usize> = dijkstra(&graph, &7).unwrap();
    let second = dijkstra(&graph, &7).unwrap();
    assert_eq!(first, second);

    let (d1, p1) = first.into_parts();
    let (d2, p2) = second.into_parts();
    assert_eq!(d1, d2);
    assert_eq!(p1, p2);
}

/// Test path reconstruction as a free function over a detached map
#[test]
fn test_reconstruct_path_from_detached_map() {
    let graph = sample_graph();
    let (_, predecessors) = dijkstra(&graph, &"A").unwrap().into_parts();
    drop(graph);

    assert_eq!(
        reconstruct_path(&predecessors, &"A", &"E"),
        Some(vec!["A", "C", "B", "D", "E"])
    );
    assert_eq!(reconstruct_path(&predecessors, &"A", &"A"), Some(vec!["A"]));
    assert_eq!(reconstruct_path(&predecessors, &"B", &"E"), None);
}

/// Test serializing a result for a presentation layer
#[test]
fn test_result_serializes_to_json() {
    let mut graph = WeightedGraph::from_edges(vec![
        ("A".to_string(), "B".to_string(), 2),
        ("B".to_string(), "C".to_string(), 3),
    ]);
    graph.add_vertex("Z".to_string());

    let paths = dijkstra(&graph, &"A".to_string()).unwrap();
    let json = serde_json::to_value(&paths).unwrap();

    assert_eq!(json["source"], "A");
    assert_eq!(json["distances"]["C"], serde_json::json!({"Finite": 5}));
    assert_eq!(json["distances"]["Z"], serde_json::json!("Infinite"));
    assert_eq!(json["predecessors"]["C"], "B");
    assert!(json["predecessors"]["A"].is_null());
}
