//! Dijkstra engines, one per heap backend.
//!
//! Both engines share the same algorithmic shape and differ only in the
//! queue operations used and in their insertion strategy:
//!
//! - [`BinaryHeapDijkstra`] inserts every vertex up front with an infinite
//!   key and relaxes purely through decrease-key. The array-backed heap
//!   benefits from dense pre-allocation, at an O(V) upfront cost.
//! - [`FibHeapDijkstra`] inserts the source eagerly and every other vertex
//!   lazily on first relaxation, keeping a vertex-to-handle map so a later
//!   relaxation decreases the existing entry instead of re-inserting.
//!
//! The two strategies are genuine trade-offs of the respective structures
//! and are deliberately not unified.

use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{FibHandle, FibonacciHeap, IndexedBinaryHeap, PriorityQueue};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Distance estimate used as the binary-heap key. `Unreachable` orders after
/// every finite distance, which the derived `Ord` provides through variant
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Dist<W> {
    Finite(W),
    Unreachable,
}

/// Dijkstra's algorithm over the indexed binary heap
#[derive(Debug, Default)]
pub struct BinaryHeapDijkstra;

impl BinaryHeapDijkstra {
    /// Creates a new engine instance
    pub fn new() -> Self {
        BinaryHeapDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BinaryHeapDijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra (indexed binary heap)"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Dist<W>> = vec![Dist::Unreachable; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Dist::Finite(W::zero());

        // Every vertex goes in up front; relaxation is pure decrease-key
        let mut queue = IndexedBinaryHeap::with_capacity(n);
        for v in 0..n {
            queue.insert(v, distances[v])?;
        }

        let mut settled = 0usize;
        while let Some((u, dist_u)) = queue.extract_min() {
            // Everything still queued is unreachable
            let Dist::Finite(dist_u) = dist_u else {
                break;
            };
            settled += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                // checked_add: a sum past the weight type's range cannot be
                // a shorter path
                let Some(new_dist) = dist_u.checked_add(&weight) else {
                    continue;
                };
                if Dist::Finite(new_dist) < distances[v] {
                    distances[v] = Dist::Finite(new_dist);
                    predecessors[v] = Some(u);
                    queue.decrease_key(v, Dist::Finite(new_dist))?;
                }
            }
        }

        debug!("binary-heap dijkstra settled {settled}/{n} vertices from {source}");

        Ok(ShortestPathResult {
            distances: distances
                .into_iter()
                .map(|d| match d {
                    Dist::Finite(w) => Some(w),
                    Dist::Unreachable => None,
                })
                .collect(),
            predecessors,
            source,
        })
    }
}

/// Dijkstra's algorithm over the Fibonacci heap
#[derive(Debug, Default)]
pub struct FibHeapDijkstra;

impl FibHeapDijkstra {
    /// Creates a new engine instance
    pub fn new() -> Self {
        FibHeapDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for FibHeapDijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra (Fibonacci heap)"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        // Only discovered vertices live in the heap; `handles` maps a vertex
        // to its live entry and is cleared on extraction so a settled vertex
        // can never be decreased or re-inserted through a stale handle.
        let mut queue: FibonacciHeap<W> = FibonacciHeap::new();
        let mut handles: Vec<Option<FibHandle>> = vec![None; n];
        handles[source] = Some(queue.insert(source, W::zero())?);

        let mut settled = 0usize;
        while let Some((u, dist_u)) = queue.extract_min() {
            handles[u] = None;
            settled += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                let Some(new_dist) = dist_u.checked_add(&weight) else {
                    continue;
                };
                let improved = match distances[v] {
                    None => true,
                    Some(current) => new_dist < current,
                };
                if improved {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    let existing = handles[v];
                    match existing {
                        Some(handle) => queue.decrease_key(handle, new_dist)?,
                        // First time v is reached; with non-negative weights
                        // an already settled vertex cannot improve, so this
                        // branch never revives one.
                        None => {
                            let handle = queue.insert(v, new_dist)?;
                            handles[v] = Some(handle);
                        }
                    }
                }
            }
        }

        debug!("fibonacci-heap dijkstra settled {settled}/{n} vertices from {source}");

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
