use crate::graph::{Edge, EdgeId, Graph, VertexId, Weight, WeightFunction};
use crate::{Error, Result};

/// Walks parent edges backward from `target` until `source` is reached and
/// returns the edges ordered from source to target.
///
/// Fails with `Unreachable` when a vertex without a parent edge is met before
/// the source.
pub fn reconstruct_path<G>(
    graph: &G,
    parent_edges: &[Option<EdgeId>],
    source: VertexId,
    target: VertexId,
) -> Result<Vec<Edge>>
where
    G: Graph + ?Sized,
{
    if target.index() >= parent_edges.len() {
        return Err(Error::InvalidVertex(target.index()));
    }

    let mut path = Vec::new();
    let mut current = target;

    while current != source {
        let id = parent_edges[current.index()].ok_or(Error::Unreachable(target.index()))?;
        let edge = graph.edge(id).ok_or(Error::UnknownEdge(id.index()))?;
        path.push(*edge);
        current = edge.from;

        // a parent chain longer than the vertex count can only be a cycle
        if path.len() > parent_edges.len() {
            return Err(Error::Unreachable(target.index()));
        }
    }

    path.reverse();
    Ok(path)
}

/// Total weight of a sequence of edges; 0 for an empty path
pub fn path_length<W, F>(weights: &F, path: &[Edge]) -> Result<W>
where
    W: Weight,
    F: WeightFunction<W> + ?Sized,
{
    path.iter().try_fold(W::zero(), |total, edge| {
        let weight = weights.weight(edge).ok_or(Error::MissingWeight(edge.id.index()))?;
        Ok(total.saturating_add(weight))
    })
}
