//! Dijkstra's single-source shortest paths over interchangeable heap backends.
//!
//! This library computes shortest paths on weighted directed graphs with
//! non-negative edge weights, parameterized over the priority queue used to
//! select the next vertex to finalize:
//!
//! - [`IndexedBinaryHeap`]: array-backed binary min-heap with a
//!   vertex-to-position index for O(log n) decrease-key.
//! - [`FibonacciHeap`]: node-forest min-heap with O(1) amortized insert and
//!   decrease-key and O(log n) amortized extract-min.
//!
//! Vertex ids are 0-based and contiguous. Unreachable vertices are reported
//! as `None` in the resulting distance vector.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{BinaryHeapDijkstra, FibHeapDijkstra},
    shortest_paths, HeapKind, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{FibonacciHeap, IndexedBinaryHeap, PriorityQueue};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Heap capacity {capacity} exceeded")]
    HeapFull { capacity: usize },

    #[error("decrease_key called with a key greater than the current key")]
    KeyIncrease,

    #[error("Heap handle refers to an already extracted entry")]
    StaleHandle,

    #[error("Malformed graph data at line {line}: {reason}")]
    MalformedGraph { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
