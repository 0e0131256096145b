use rand::Rng;

use crate::graph::{DirectedGraph, EdgeWeights, MutableGraph, VertexId};
use crate::{Error, Result};

/// A generated graph together with its edge weights
pub type WeightedGraph = (DirectedGraph, EdgeWeights<u64>);

/// Generates a random directed graph with roughly `edge_factor * n` edges.
/// Weights are drawn uniformly from `1..=max_weight`; self-loops are skipped,
/// parallel edges may appear. `edge_factor` must be finite and non-negative.
pub fn generate_random<R: Rng + ?Sized>(
    num_vertices: usize,
    edge_factor: f64,
    max_weight: u64,
    rng: &mut R,
) -> Result<WeightedGraph> {
    if !edge_factor.is_finite() || edge_factor < 0.0 {
        return Err(Error::InvalidGraphParameters(format!("edge factor {} must be finite and non-negative", edge_factor)));
    }

    let mut graph = DirectedGraph::with_capacity(num_vertices);
    let num_edges = (edge_factor * num_vertices as f64) as usize;
    let mut weights = EdgeWeights::with_capacity(num_edges);

    if num_vertices < 2 {
        return Ok((graph, weights));
    }

    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        if u != v {
            let id = graph.add_edge(VertexId(u), VertexId(v))?;
            weights.set(id, rng.gen_range(1..=max_weight.max(1)));
        }
    }

    Ok((graph, weights))
}

/// Generates a `width` x `height` grid with edges in both directions between
/// horizontal and vertical neighbours. Vertex `(x, y)` has index `y * width + x`.
pub fn generate_grid<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    max_weight: u64,
    rng: &mut R,
) -> Result<WeightedGraph> {
    let num_vertices = width
        .checked_mul(height)
        .ok_or_else(|| Error::InvalidGraphParameters(format!("{} x {} grid is too large", width, height)))?;
    let mut graph = DirectedGraph::with_capacity(num_vertices);
    let mut weights = EdgeWeights::with_capacity(num_vertices.saturating_mul(4));
    let index = |x: usize, y: usize| VertexId(y * width + x);

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            let mut neighbours = Vec::with_capacity(4);
            if x > 0 {
                neighbours.push(index(x - 1, y));
            }
            if x + 1 < width {
                neighbours.push(index(x + 1, y));
            }
            if y > 0 {
                neighbours.push(index(x, y - 1));
            }
            if y + 1 < height {
                neighbours.push(index(x, y + 1));
            }

            for neighbour in neighbours {
                let id = graph.add_edge(current, neighbour)?;
                weights.set(id, rng.gen_range(1..=max_weight.max(1)));
            }
        }
    }

    Ok((graph, weights))
}
