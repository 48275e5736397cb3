//! Shortest-path benchmark harness.
//!
//! Usage:
//!   benchmark <graph_file> <query_count>   load a graph file (DIMACS .gr
//!                                          or plain "from to weight" lines)
//!   benchmark --random <vertices> <query_count>
//!
//! Runs `query_count` random-source queries against both heap backends and
//! reports totals and per-query averages.

use std::env;
use std::process::exit;
use std::time::{Duration, Instant};

use dijkstra_heaps::algorithm::{shortest_paths, HeapKind};
use dijkstra_heaps::graph::generators::random_graph;
use dijkstra_heaps::graph::loader::load_graph;
use dijkstra_heaps::graph::Graph;
use dijkstra_heaps::DirectedGraph;
use rand::Rng;

fn usage() -> ! {
    eprintln!("Usage: benchmark <graph_file> <query_count>");
    eprintln!("       benchmark --random <vertices> <query_count>");
    exit(1);
}

fn run_queries(
    graph: &DirectedGraph<u64>,
    sources: &[usize],
    kind: HeapKind,
    label: &str,
) -> Duration {
    println!("Running {} queries with {label}...", sources.len());

    let mut total = Duration::ZERO;
    let mut reachable_total = 0usize;
    for &source in sources {
        let start = Instant::now();
        let result = match shortest_paths(graph, source, kind) {
            Ok(result) => result,
            Err(err) => {
                eprintln!("query from {source} failed: {err}");
                exit(1);
            }
        };
        total += start.elapsed();
        reachable_total += result.distances.iter().filter(|d| d.is_some()).count();
    }

    println!("  total time:        {:.4} s", total.as_secs_f64());
    println!(
        "  per query:         {:.4} ms",
        total.as_secs_f64() * 1000.0 / sources.len() as f64
    );
    println!(
        "  avg reachable:     {}",
        reachable_total / sources.len().max(1)
    );
    total
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut rng = rand::thread_rng();

    let (graph, queries) = match args.as_slice() {
        [_, flag, vertices, queries] if flag == "--random" => {
            let vertices: usize = vertices.parse().unwrap_or_else(|_| usage());
            let queries: usize = queries.parse().unwrap_or_else(|_| usage());
            println!("Generating random graph with {vertices} vertices...");
            (random_graph(vertices, 4.0, 1000, &mut rng), queries)
        }
        [_, path, queries] => {
            let queries: usize = queries.parse().unwrap_or_else(|_| usage());
            println!("Loading graph from {path}...");
            let graph = match load_graph(path) {
                Ok(graph) => graph,
                Err(err) => {
                    eprintln!("failed to load graph: {err}");
                    exit(1);
                }
            };
            (graph, queries)
        }
        _ => usage(),
    };

    if queries == 0 {
        eprintln!("query count must be positive");
        exit(1);
    }

    println!(
        "Graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let sources: Vec<usize> = (0..queries)
        .map(|_| rng.gen_range(0..graph.vertex_count()))
        .collect();

    let binary = run_queries(&graph, &sources, HeapKind::Binary, "indexed binary heap");
    let fibonacci = run_queries(&graph, &sources, HeapKind::Fibonacci, "Fibonacci heap");

    println!("\n=== Summary ===");
    println!(
        "binary heap:    {:.4} ms/query",
        binary.as_secs_f64() * 1000.0 / queries as f64
    );
    println!(
        "fibonacci heap: {:.4} ms/query",
        fibonacci.as_secs_f64() * 1000.0 / queries as f64
    );
}
