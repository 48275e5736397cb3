use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists.
///
/// Vertex ids are 0-based and contiguous. The graph is intended to be built
/// once (by a loader or generator) and then queried read-only; shortest-path
/// queries never mutate it.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: adjacency[vertex] = [(target, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Number of edges in the graph
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Adds a vertex to the graph and returns its ID
    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Adds a directed edge between existing vertices.
    ///
    /// Rejects endpoints outside the vertex range and negative weights, the
    /// latter because Dijkstra's correctness depends on non-negative weights.
    /// Parallel edges are allowed; relaxation order resolves ties.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight { from, to });
        }

        self.adjacency[from].push((to, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.adjacency
            .iter()
            .all(|edges| edges.iter().all(|(_, weight)| *weight >= W::zero()))
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|edges| edges.iter().any(|(target, _)| *target == to))
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.adjacency.get(from)?.iter().find(|(target, _)| *target == to).map(|(_, weight)| *weight)
    }
}
