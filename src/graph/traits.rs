use num_traits::{CheckedAdd, Zero};
use std::fmt::Debug;

/// Edge weight requirements.
///
/// Weights must be totally ordered, have a zero, and support overflow-checked
/// addition so relaxation never wraps. The unsigned and signed integer types
/// all qualify.
pub trait Weight: Copy + Ord + Zero + CheckedAdd + Debug {}

impl<T> Weight for T where T: Copy + Ord + Zero + CheckedAdd + Debug {}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}
