//! spath - Single-Source Shortest Paths with a decrease-key priority queue
//!
//! This library computes shortest paths from one source vertex over a weighted,
//! directed graph using Dijkstra's algorithm. Every vertex is kept in a binary
//! min-heap for the whole run and its distance is lowered in place through a
//! handle obtained at insertion time, giving O((V + E) log V) running time.
//!
//! After a run, concrete paths and their lengths are reconstructed from the
//! shortest-path tree of parent edges.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

// Re-export main types for convenient use
pub use algorithm::{
    bellman_ford::BellmanFord,
    dijkstra::{Dijkstra, RunState, RunStats, ShortestPaths},
    Distance, DistanceLabel, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{DecreaseKeyHeap, Handle, HeapStats};
pub use graph::{DirectedGraph, Edge, EdgeId, EdgeWeights, Graph, MutableGraph, VertexId, WeightFunction};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Unknown edge ID: {0}")]
    UnknownEdge(usize),

    #[error("Invalid graph parameters: {0}")]
    InvalidGraphParameters(String),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("No weight defined for edge {0}")]
    MissingWeight(usize),

    #[error("Extraction from an empty priority queue")]
    EmptyQueue,

    #[error("Decrease-key would increase the value behind the handle")]
    InvalidDecrease,

    #[error("Priority queue capacity of {0} exceeded")]
    CapacityExceeded(usize),

    #[error("Handle does not refer to a queued element")]
    StaleHandle,

    #[error("Shortest paths have already been computed for this instance")]
    AlreadyRun,

    #[error("Shortest paths have not been computed yet")]
    NotRun,

    #[error("Vertex {0} is unreachable from the source")]
    Unreachable(usize),
}

impl Error {
    /// True for the one error kind that is an expected outcome rather than a bug
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Error::Unreachable(_))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
