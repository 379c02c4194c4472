use std::sync::Once;
use tracing_subscriber::EnvFilter;
use weighted_paths::WeightedGraph;

static INIT: Once = Once::new();

/// Route engine logs to the test harness; `RUST_LOG=weighted_paths=trace` shows relaxations
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// The six-vertex example graph
#[allow(dead_code)]
pub fn sample_graph() -> WeightedGraph<&'static str> {
    WeightedGraph::from_edges(vec![
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "D", 5),
        ("C", "D", 8),
        ("C", "E", 10),
        ("D", "E", 2),
        ("D", "F", 6),
        ("E", "F", 3),
    ])
}
