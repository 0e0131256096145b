use std::fmt::Debug;

use crate::graph::edge::{Edge, EdgeId, VertexId};

/// Trait representing a directed graph with a fixed vertex set
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex of the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Returns an iterator over the outgoing edges of a vertex
    fn edges_from(&self, vertex: VertexId) -> Box<dyn Iterator<Item = &Edge> + '_>;

    /// Looks up an edge by its identity
    fn edge(&self, id: EdgeId) -> Option<&Edge>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool;
}

/// Trait for mutable graph operations
pub trait MutableGraph: Graph {
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> VertexId;

    /// Adds a directed edge between two existing vertices.
    /// Parallel edges are kept as distinct edges.
    fn add_edge(&mut self, from: VertexId, to: VertexId) -> crate::Result<EdgeId>;
}

/// Mapping from edges to non-negative integer weights
pub trait WeightFunction<W> {
    /// Weight of the edge, or `None` if the function is not defined there
    fn weight(&self, edge: &Edge) -> Option<W>;
}

impl<W, F> WeightFunction<W> for F
where
    F: Fn(&Edge) -> Option<W>,
{
    fn weight(&self, edge: &Edge) -> Option<W> {
        self(edge)
    }
}
