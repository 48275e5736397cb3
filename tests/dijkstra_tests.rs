use dijkstra_heaps::algorithm::{shortest_paths, HeapKind};
use dijkstra_heaps::graph::generators::random_graph;
use dijkstra_heaps::graph::Graph;
use dijkstra_heaps::{
    BinaryHeapDijkstra, DirectedGraph, Error, FibHeapDijkstra, ShortestPathAlgorithm,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Triangle where the two-hop route 0 -> 2 -> 1 beats the direct edge
fn triangle() -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_vertices(3);
    graph.add_edge(0, 1, 5).unwrap();
    graph.add_edge(0, 2, 2).unwrap();
    graph.add_edge(2, 1, 1).unwrap();
    graph
}

#[test]
fn triangle_takes_the_two_hop_route() {
    let graph = triangle();
    for kind in [HeapKind::Binary, HeapKind::Fibonacci] {
        let result = shortest_paths(&graph, 0, kind).unwrap();
        assert_eq!(result.distances, vec![Some(0), Some(3), Some(2)]);
        assert_eq!(result.predecessors[1], Some(2));
        assert_eq!(result.predecessors[2], Some(0));
    }
}

#[test]
fn single_vertex_no_edges() {
    let graph: DirectedGraph<u64> = DirectedGraph::with_vertices(1);
    for kind in [HeapKind::Binary, HeapKind::Fibonacci] {
        let result = shortest_paths(&graph, 0, kind).unwrap();
        assert_eq!(result.distances, vec![Some(0)]);
    }
}

#[test]
fn disconnected_vertex_is_unreachable() {
    let mut graph: DirectedGraph<u64> = DirectedGraph::with_vertices(3);
    graph.add_edge(0, 1, 4).unwrap();
    // Vertex 2 has no incident edges at all
    for kind in [HeapKind::Binary, HeapKind::Fibonacci] {
        let result = shortest_paths(&graph, 0, kind).unwrap();
        assert_eq!(result.distances, vec![Some(0), Some(4), None]);
        assert_eq!(result.predecessors[2], None);
    }
}

#[test]
fn invalid_source_is_rejected() {
    let graph = triangle();
    for kind in [HeapKind::Binary, HeapKind::Fibonacci] {
        assert!(matches!(
            shortest_paths(&graph, 3, kind),
            Err(Error::SourceNotFound)
        ));
    }
}

#[test]
fn negative_weight_is_rejected_at_build_time() {
    let mut graph: DirectedGraph<i64> = DirectedGraph::with_vertices(2);
    assert!(matches!(
        graph.add_edge(0, 1, -3),
        Err(Error::NegativeWeight { from: 0, to: 1 })
    ));
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.validate_non_negative());
}

#[test]
fn out_of_range_edge_is_rejected() {
    let mut graph: DirectedGraph<u64> = DirectedGraph::with_vertices(2);
    assert!(matches!(graph.add_edge(0, 5, 1), Err(Error::InvalidVertex(5))));
    assert!(matches!(graph.add_edge(5, 0, 1), Err(Error::InvalidVertex(5))));
}

#[test]
fn source_distance_zero_and_no_negative_outputs() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(200, 3.0, 50, &mut rng);
    for kind in [HeapKind::Binary, HeapKind::Fibonacci] {
        let result = shortest_paths(&graph, 17, kind).unwrap();
        assert_eq!(result.distances[17], Some(0));
        // u64 weights cannot go negative; check the sums stay sane instead
        for (v, dist) in result.distances.iter().enumerate() {
            if let Some(d) = dist {
                assert!(*d < 200u64 * 50, "implausible distance {d} for vertex {v}");
            }
        }
    }
}

#[test]
fn backends_agree_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(99);
    for trial in 0..20 {
        let vertices = rng.gen_range(2..150);
        let graph = random_graph(vertices, 2.5, 100, &mut rng);
        let source = rng.gen_range(0..vertices);

        let binary = shortest_paths(&graph, source, HeapKind::Binary).unwrap();
        let fibonacci = shortest_paths(&graph, source, HeapKind::Fibonacci).unwrap();
        assert_eq!(
            binary.distances, fibonacci.distances,
            "backends disagree on trial {trial} (source {source})"
        );
    }
}

#[test]
fn path_reconstruction_follows_real_edges() {
    type Engine = FibHeapDijkstra;

    let graph = triangle();
    let engine = Engine::new();
    let result = engine.compute_shortest_paths(&graph, 0).unwrap();

    let path = <Engine as ShortestPathAlgorithm<u64, DirectedGraph<u64>>>::get_path(
        &engine, &result, 1,
    )
    .unwrap();
    assert_eq!(path, vec![0, 2, 1]);
    for pair in path.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]));
    }

    // Unreachable target has no path
    let mut disconnected: DirectedGraph<u64> = DirectedGraph::with_vertices(2);
    disconnected.add_edge(1, 0, 1).unwrap();
    let result = engine.compute_shortest_paths(&disconnected, 0).unwrap();
    let path = <Engine as ShortestPathAlgorithm<u64, DirectedGraph<u64>>>::get_path(
        &engine, &result, 1,
    );
    assert_eq!(path, None);
}

#[test]
fn engines_report_their_names() {
    let graph = triangle();
    let binary = BinaryHeapDijkstra::new();
    let fibonacci = FibHeapDijkstra::new();
    assert!(
        ShortestPathAlgorithm::<u64, DirectedGraph<u64>>::name(&binary).contains("binary")
    );
    assert!(
        ShortestPathAlgorithm::<u64, DirectedGraph<u64>>::name(&fibonacci).contains("Fibonacci")
    );
    // Either entry point computes the same answer
    let via_trait = fibonacci.compute_shortest_paths(&graph, 0).unwrap();
    let via_dispatch = shortest_paths(&graph, 0, HeapKind::Fibonacci).unwrap();
    assert_eq!(via_trait.distances, via_dispatch.distances);
}
