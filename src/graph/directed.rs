use crate::graph::edge::{Edge, EdgeId, VertexId};
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// All edges, indexed by `EdgeId`
    edges: Vec<Edge>,

    /// Outgoing edges for each vertex: vertex index -> [edge ids]
    outgoing: Vec<Vec<EdgeId>>,
}

impl DirectedGraph {
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            edges: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            edges: Vec::new(),
            outgoing: vec![Vec::new(); vertices],
        }
    }

    /// Returns true if there's at least one edge between the two vertices
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.edges_from(from).any(|edge| edge.to == to)
    }

    /// Returns every edge from `from` to `to`, in insertion order
    pub fn edges_between(&self, from: VertexId, to: VertexId) -> Vec<EdgeId> {
        self.edges_from(from)
            .filter(|edge| edge.to == to)
            .map(|edge| edge.id)
            .collect()
    }

    /// Returns all edges of the graph in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl Graph for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.outgoing.len()).map(VertexId))
    }

    fn edges_from(&self, vertex: VertexId) -> Box<dyn Iterator<Item = &Edge> + '_> {
        if let Some(ids) = self.outgoing.get(vertex.index()) {
            Box::new(ids.iter().map(move |id| &self.edges[id.index()]))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.outgoing.len()
    }
}

impl MutableGraph for DirectedGraph {
    fn add_vertex(&mut self) -> VertexId {
        let new_id = VertexId(self.outgoing.len());
        self.outgoing.push(Vec::new());
        new_id
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from.index(), to.index()));
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { id, from, to });
        self.outgoing[from.index()].push(id);
        Ok(id)
    }
}
