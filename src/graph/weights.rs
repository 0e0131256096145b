use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

use crate::graph::edge::{Edge, EdgeId};
use crate::graph::traits::WeightFunction;

/// Non-negative integer edge weight
pub trait Weight: PrimInt + Unsigned + Debug + Send + Sync {}

impl<W> Weight for W where W: PrimInt + Unsigned + Debug + Send + Sync {}

/// Edge weights stored in a table indexed by `EdgeId`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeWeights<W> {
    weights: Vec<Option<W>>,
}

impl<W> EdgeWeights<W>
where
    W: Weight,
{
    pub fn new() -> Self {
        EdgeWeights { weights: Vec::new() }
    }

    pub fn with_capacity(edges: usize) -> Self {
        EdgeWeights {
            weights: Vec::with_capacity(edges),
        }
    }

    /// Sets the weight of an edge, replacing any previous value
    pub fn set(&mut self, edge: EdgeId, weight: W) {
        let index = edge.index();
        if index >= self.weights.len() {
            self.weights.resize(index + 1, None);
        }
        self.weights[index] = Some(weight);
    }

    pub fn get(&self, edge: EdgeId) -> Option<W> {
        self.weights.get(edge.index()).copied().flatten()
    }

    /// Number of edges with a defined weight
    pub fn len(&self) -> usize {
        self.weights.iter().filter(|w| w.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<W> WeightFunction<W> for EdgeWeights<W>
where
    W: Weight,
{
    fn weight(&self, edge: &Edge) -> Option<W> {
        self.get(edge.id)
    }
}
