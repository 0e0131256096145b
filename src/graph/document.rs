use serde::{Deserialize, Serialize};

use crate::graph::{DirectedGraph, EdgeWeights, Graph, MutableGraph, VertexId};
use crate::{Error, Result};

/// A weighted edge as it appears in a serialized graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: usize,
    pub to: usize,
    pub weight: u64,
}

/// Serializable form of a weighted directed graph.
///
/// Edge `i` of `edges` becomes `EdgeId(i)` once built, so edge identities
/// survive a round trip through JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    pub vertex_count: usize,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Builds the graph and its weight table, rejecting edges that name
    /// vertices outside `0..vertex_count`
    pub fn build(&self) -> Result<(DirectedGraph, EdgeWeights<u64>)> {
        let mut graph = DirectedGraph::with_capacity(self.vertex_count);
        let mut weights = EdgeWeights::with_capacity(self.edges.len());

        for record in &self.edges {
            let id = graph.add_edge(VertexId(record.from), VertexId(record.to))?;
            weights.set(id, record.weight);
        }

        Ok((graph, weights))
    }

    /// Captures a graph and its weights. Every edge must carry a weight.
    pub fn from_graph(graph: &DirectedGraph, weights: &EdgeWeights<u64>) -> Result<Self> {
        let edges = graph
            .edges()
            .iter()
            .map(|edge| {
                let weight = weights.get(edge.id).ok_or(Error::MissingWeight(edge.id.index()))?;
                Ok(EdgeRecord {
                    from: edge.from.index(),
                    to: edge.to.index(),
                    weight,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(GraphDocument {
            vertex_count: graph.vertex_count(),
            edges,
        })
    }
}
