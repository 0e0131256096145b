use crate::algorithm::distance::Distance;
use crate::algorithm::path::{path_length, reconstruct_path};
use crate::graph::{Edge, EdgeId, Graph, VertexId, Weight, WeightFunction};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W> {
    /// Distances from source to each vertex
    pub distances: Vec<Distance<W>>,

    /// Edge used to reach each vertex in the shortest path tree
    pub parent_edges: Vec<Option<EdgeId>>,

    /// Source vertex ID
    pub source: VertexId,
}

impl<W: Weight> ShortestPathResult<W> {
    pub fn distance(&self, vertex: VertexId) -> Result<Distance<W>> {
        self.distances
            .get(vertex.index())
            .copied()
            .ok_or(Error::InvalidVertex(vertex.index()))
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Edges of the shortest path from the source to `target`
    pub fn path<G: Graph + ?Sized>(&self, graph: &G, target: VertexId) -> Result<Vec<Edge>> {
        reconstruct_path(graph, &self.parent_edges, self.source, target)
    }

    /// Total weight of the shortest path from the source to `target`
    pub fn length<G, F>(&self, graph: &G, weights: &F, target: VertexId) -> Result<W>
    where
        G: Graph + ?Sized,
        F: WeightFunction<W> + ?Sized,
    {
        let path = self.path(graph, target)?;
        path_length(weights, &path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths<F>(&self, graph: &G, weights: &F, source: VertexId) -> Result<ShortestPathResult<W>>
    where
        F: WeightFunction<W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
