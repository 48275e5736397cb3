use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_heaps::algorithm::{shortest_paths, HeapKind};
use dijkstra_heaps::graph::generators::random_graph;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_backends(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut group = c.benchmark_group("dijkstra");

    for &vertices in &[1_000usize, 10_000, 50_000] {
        let graph = random_graph(vertices, 4.0, 1000, &mut rng);

        group.bench_with_input(
            BenchmarkId::new("binary_heap", vertices),
            &graph,
            |b, graph| b.iter(|| shortest_paths(graph, 0, HeapKind::Binary).unwrap()),
        );
        group.bench_with_input(
            BenchmarkId::new("fibonacci_heap", vertices),
            &graph,
            |b, graph| b.iter(|| shortest_paths(graph, 0, HeapKind::Fibonacci).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
