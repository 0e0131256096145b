use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Parameters for graph generation
#[derive(Debug, Clone, Deserialize)]
pub struct GraphGenerationRequest {
    /// "random" or "grid"
    pub graph_type: String,
    #[serde(default)]
    pub vertex_count: usize,
    #[serde(default = "default_edge_factor")]
    pub edge_factor: f64,
    #[serde(default)]
    pub grid_dimensions: Option<(usize, usize)>,
    #[serde(default = "default_max_weight")]
    pub max_weight: u64,
    /// Fixes the random generator for reproducible graphs
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_edge_factor() -> f64 { 2.0 }
fn default_max_weight() -> u64 { 100 }

/// Summary of a stored graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSummary {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Parameters for a shortest path query
#[derive(Debug, Clone, Deserialize)]
pub struct ShortestPathRequest {
    pub source: usize,
    /// Vertices to reconstruct paths for; every vertex when absent
    #[serde(default)]
    pub targets: Option<Vec<usize>>,
}

/// An edge on a reconstructed path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathEdge {
    pub id: usize,
    pub from: usize,
    pub to: usize,
    pub weight: u64,
}

/// Path from the source to one target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetPath {
    pub target: usize,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,
    #[serde(default)]
    pub edges: Vec<PathEdge>,
}

/// Counters reported for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    pub extractions: usize,
    pub relaxations: usize,
    pub improvements: usize,
    pub heap_inserts: usize,
    pub heap_decreases: usize,
    pub heap_swaps: usize,
}

/// Response containing shortest path results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPathResponse {
    pub execution_id: Uuid,
    pub graph_id: Uuid,
    pub source: usize,
    pub execution_time_ms: f64,
    /// Finite distances only; unreachable vertices are absent
    pub distances: BTreeMap<usize, u64>,
    /// Vertex -> id of the edge that reaches it in the shortest-path tree
    pub parent_edges: BTreeMap<usize, usize>,
    pub paths: Vec<TargetPath>,
    pub metrics: RunMetrics,
}

/// Error response for API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
