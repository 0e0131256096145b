use log::debug;

use crate::algorithm::distance::Distance;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, VertexId, Weight, WeightFunction};
use crate::{Error, Result};

/// Bellman-Ford shortest paths, O(V * E).
///
/// Slow but independent of any priority queue, which makes it the reference
/// the Dijkstra engine is checked against.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths<F>(&self, graph: &G, weights: &F, source: VertexId) -> Result<ShortestPathResult<W>>
    where
        F: WeightFunction<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut distances = vec![Distance::Infinite; n];
        let mut parent_edges = vec![None; n];
        distances[source.index()] = Distance::zero();

        let mut rounds = 0;
        for _ in 0..n.saturating_sub(1) {
            rounds += 1;
            let mut changed = false;

            for u in graph.vertices() {
                let d = distances[u.index()];
                if !d.is_finite() {
                    continue;
                }
                for edge in graph.edges_from(u) {
                    let weight = weights.weight(edge).ok_or(Error::MissingWeight(edge.id.index()))?;
                    let candidate = d.plus(weight);
                    if candidate < distances[edge.to.index()] {
                        distances[edge.to.index()] = candidate;
                        parent_edges[edge.to.index()] = Some(edge.id);
                        changed = true;
                    }
                }
            }

            if !changed {
                break;
            }
        }
        debug!("Bellman-Ford converged after {} rounds", rounds);

        Ok(ShortestPathResult {
            distances,
            parent_edges,
            source,
        })
    }
}
