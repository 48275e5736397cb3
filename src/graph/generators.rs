//! Random graph generation for benchmarks and randomized tests.

use crate::graph::{DirectedGraph, Graph};
use log::debug;
use rand::Rng;

/// Generates a random directed graph with `vertices` vertices and roughly
/// `edge_factor * vertices` edges with uniform weights in `1..=max_weight`.
///
/// Self-loops are skipped; parallel edges may occur, which is harmless for
/// shortest-path queries.
pub fn random_graph<R: Rng>(
    vertices: usize,
    edge_factor: f64,
    max_weight: u64,
    rng: &mut R,
) -> DirectedGraph<u64> {
    assert!(vertices > 0, "graph must have at least one vertex");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = DirectedGraph::with_vertices(vertices);
    let num_edges = (edge_factor * vertices as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        if u != v {
            let weight = rng.gen_range(1..=max_weight);
            // Endpoints are in range and the weight is positive, so this
            // cannot fail.
            let _ = graph.add_edge(u, v, weight);
        }
    }

    debug!(
        "generated random graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    graph
}
