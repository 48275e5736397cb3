use dijkstra_heaps::graph::loader::{read_dimacs, read_edge_list};
use dijkstra_heaps::graph::Graph;
use dijkstra_heaps::{DirectedGraph, Error};
use std::io::Cursor;

#[test]
fn plain_edge_list_loads() {
    let input = "0 1 5\n0 2 2\n2 1 1\n";
    let graph: DirectedGraph<u64> = read_edge_list(Cursor::new(input)).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.get_edge_weight(0, 1), Some(5));
    assert_eq!(graph.get_edge_weight(2, 1), Some(1));
    assert!(!graph.has_edge(1, 0));
}

#[test]
fn plain_edge_list_skips_blank_lines() {
    let input = "0 1 5\n\n  \n1 0 3\n";
    let graph: DirectedGraph<u64> = read_edge_list(Cursor::new(input)).unwrap();
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn dimacs_ids_shift_to_zero_based() {
    let input = "c USA-road sample\np sp 3 3\na 1 2 5\na 1 3 2\na 3 2 1\n";
    let graph: DirectedGraph<u64> = read_dimacs(Cursor::new(input)).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.get_edge_weight(0, 1), Some(5));
    assert_eq!(graph.get_edge_weight(2, 1), Some(1));
}

#[test]
fn both_formats_produce_the_same_graph() {
    let plain = "0 1 5\n0 2 2\n2 1 1\n";
    let dimacs = "p sp 3 3\na 1 2 5\na 1 3 2\na 3 2 1\n";

    let a: DirectedGraph<u64> = read_edge_list(Cursor::new(plain)).unwrap();
    let b: DirectedGraph<u64> = read_dimacs(Cursor::new(dimacs)).unwrap();

    assert_eq!(a.vertex_count(), b.vertex_count());
    for v in 0..a.vertex_count() {
        let mut ea: Vec<_> = a.outgoing_edges(v).collect();
        let mut eb: Vec<_> = b.outgoing_edges(v).collect();
        ea.sort_unstable();
        eb.sort_unstable();
        assert_eq!(ea, eb, "adjacency differs at vertex {v}");
    }
}

#[test]
fn malformed_lines_report_line_numbers() {
    let missing_weight = "0 1 5\n1 2\n";
    let err = read_edge_list::<u64, _>(Cursor::new(missing_weight)).unwrap_err();
    assert!(matches!(err, Error::MalformedGraph { line: 2, .. }));

    let bad_id = "0 x 5\n";
    let err = read_edge_list::<u64, _>(Cursor::new(bad_id)).unwrap_err();
    assert!(matches!(err, Error::MalformedGraph { line: 1, .. }));

    let arc_before_header = "a 1 2 3\n";
    let err = read_dimacs::<u64, _>(Cursor::new(arc_before_header)).unwrap_err();
    assert!(matches!(err, Error::MalformedGraph { line: 1, .. }));
}

#[test]
fn negative_weights_are_rejected_by_loaders() {
    let input = "0 1 -5\n";
    let err = read_edge_list::<i64, _>(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, Error::NegativeWeight { from: 0, to: 1 }));
}

#[test]
fn empty_input_is_an_error() {
    let err = read_edge_list::<u64, _>(Cursor::new("")).unwrap_err();
    assert!(matches!(err, Error::MalformedGraph { .. }));

    let err = read_dimacs::<u64, _>(Cursor::new("c only comments\n")).unwrap_err();
    assert!(matches!(err, Error::MalformedGraph { .. }));
}
