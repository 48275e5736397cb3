pub mod dijkstra;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};

use crate::graph::{Graph, Weight};
use crate::Result;
use dijkstra::{BinaryHeapDijkstra, FibHeapDijkstra};

/// Priority-queue backend selector for [`shortest_paths`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    /// Indexed binary heap, all vertices inserted up front
    Binary,
    /// Fibonacci heap, vertices inserted lazily on first relaxation
    Fibonacci,
}

/// Computes single-source shortest paths with the selected heap backend
pub fn shortest_paths<W, G>(graph: &G, source: usize, heap: HeapKind) -> Result<ShortestPathResult<W>>
where
    W: Weight,
    G: Graph<W>,
{
    match heap {
        HeapKind::Binary => BinaryHeapDijkstra::new().compute_shortest_paths(graph, source),
        HeapKind::Fibonacci => FibHeapDijkstra::new().compute_shortest_paths(graph, source),
    }
}
