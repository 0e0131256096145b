pub mod traits;
pub mod edge;
pub mod directed;
pub mod weights;
pub mod generators;
pub mod document;

pub use traits::{Graph, MutableGraph, WeightFunction};
pub use edge::{Edge, EdgeId, VertexId};
pub use directed::DirectedGraph;
pub use weights::{EdgeWeights, Weight};
pub use document::{EdgeRecord, GraphDocument};
