use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::ShortestPaths;
use crate::graph::generators::{generate_grid, generate_random};
use crate::graph::{DirectedGraph, EdgeWeights, Graph, GraphDocument, VertexId};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// A graph held by the server
#[derive(Debug)]
pub struct StoredGraph {
    pub id: Uuid,
    pub graph: DirectedGraph,
    pub weights: EdgeWeights<u64>,
    pub created_at: DateTime<Utc>,
}

impl StoredGraph {
    pub fn new(graph: DirectedGraph, weights: EdgeWeights<u64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            weights,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            id: self.id,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            created_at: self.created_at,
        }
    }
}

/// Largest graph the server will build from a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphLimits {
    pub max_vertices: usize,
    pub max_edges: usize,
}

impl GraphLimits {
    fn check(&self, vertices: usize, edges: usize) -> Result<(), ApiError> {
        if vertices > self.max_vertices || edges > self.max_edges {
            return Err(too_large(format!(
                "Graph with {} vertices and {} edges exceeds the limit of {} vertices and {} edges",
                vertices, edges, self.max_vertices, self.max_edges
            )));
        }
        Ok(())
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub graphs: Arc<Mutex<HashMap<Uuid, Arc<StoredGraph>>>>,
    pub max_graphs: usize,
    pub limits: GraphLimits,
}

impl AppState {
    pub fn new(max_graphs: usize, limits: GraphLimits) -> Self {
        Self {
            graphs: Arc::new(Mutex::new(HashMap::new())),
            max_graphs,
            limits,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Arc<StoredGraph>>>, ApiError> {
        self.graphs.lock().map_err(|_| {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "state_poisoned", "Graph store is unavailable".to_string())
        })
    }

    fn find(&self, id: Uuid) -> Result<Arc<StoredGraph>, ApiError> {
        self.lock()?
            .get(&id)
            .cloned()
            .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "graph_not_found", format!("Graph {} not found", id)))
    }

    fn store(&self, stored: StoredGraph) -> Result<GraphSummary, ApiError> {
        let mut graphs = self.lock()?;
        if graphs.len() >= self.max_graphs {
            return Err(api_error(
                StatusCode::INSUFFICIENT_STORAGE,
                "graph_store_full",
                format!("At most {} graphs can be stored", self.max_graphs),
            ));
        }
        let summary = stored.summary();
        graphs.insert(stored.id, Arc::new(stored));
        info!("Stored graph {} ({} vertices, {} edges)", summary.id, summary.vertex_count, summary.edge_count);
        Ok(summary)
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", get(list_graphs).post(upload_graph))
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:graph_id", get(get_graph))
        .route("/api/graphs/:graph_id/shortest-paths", post(shortest_paths))
        .route("/api/health", get(health_check))
}

/// Store a graph sent as a `GraphDocument`
pub async fn upload_graph(
    State(state): State<AppState>,
    Json(document): Json<GraphDocument>,
) -> Result<Json<GraphSummary>, ApiError> {
    state.limits.check(document.vertex_count, document.edges.len()).map_err(|err| {
        warn!("Rejected graph upload with {} vertices: too large", document.vertex_count);
        err
    })?;
    let (graph, weights) = document.build().map_err(|err| {
        warn!("Rejected graph upload: {}", err);
        error_response(&err)
    })?;
    state.store(StoredGraph::new(graph, weights)).map(Json)
}

/// Generate and store a new graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<Json<GraphSummary>, ApiError> {
    let limits = state.limits;
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generated = match request.graph_type.as_str() {
        "random" => {
            if !request.edge_factor.is_finite() || request.edge_factor < 0.0 {
                return Err(api_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_edge_factor",
                    format!("Edge factor {} must be finite and non-negative", request.edge_factor),
                ));
            }
            // float to int casts saturate, so huge products still fail the check
            let edges = (request.edge_factor * request.vertex_count as f64) as usize;
            limits.check(request.vertex_count, edges)?;
            generate_random(request.vertex_count, request.edge_factor, request.max_weight, &mut rng)
        }
        "grid" => {
            let (width, height) = request.grid_dimensions.unwrap_or_else(|| {
                let side = (request.vertex_count as f64).sqrt().ceil() as usize;
                (side, side)
            });
            let vertices = width
                .checked_mul(height)
                .ok_or_else(|| too_large(format!("{} x {} grid is too large", width, height)))?;
            limits.check(vertices, vertices.saturating_mul(4))?;
            generate_grid(width, height, request.max_weight, &mut rng)
        }
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_graph_type",
                format!("Unknown graph type: {}", request.graph_type),
            ));
        }
    };

    let (graph, weights) = generated.map_err(|err| error_response(&err))?;
    state.store(StoredGraph::new(graph, weights)).map(Json)
}

/// List all stored graphs
pub async fn list_graphs(State(state): State<AppState>) -> Result<Json<Vec<GraphSummary>>, ApiError> {
    let graphs = state.lock()?;
    let mut summaries: Vec<GraphSummary> = graphs.values().map(|stored| stored.summary()).collect();
    summaries.sort_by_key(|summary| summary.created_at);
    Ok(Json(summaries))
}

/// Get a stored graph as a `GraphDocument`
pub async fn get_graph(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
) -> Result<Json<GraphDocument>, ApiError> {
    let stored = state.find(graph_id)?;
    GraphDocument::from_graph(&stored.graph, &stored.weights)
        .map(Json)
        .map_err(|err| error_response(&err))
}

/// Run Dijkstra from a source and reconstruct paths to the requested targets
pub async fn shortest_paths(
    State(state): State<AppState>,
    Path(graph_id): Path<Uuid>,
    Json(request): Json<ShortestPathRequest>,
) -> Result<Json<ShortestPathResponse>, ApiError> {
    let stored = state.find(graph_id)?;

    let response = tokio::task::spawn_blocking(move || compute_response(&stored, &request))
        .await
        .map_err(|err| {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "computation_failed", format!("Worker failed: {}", err))
        })?
        .map_err(|err| {
            warn!("Shortest path query on graph {} failed: {}", graph_id, err);
            error_response(&err)
        })?;

    Ok(Json(response))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn compute_response(stored: &StoredGraph, request: &ShortestPathRequest) -> crate::Result<ShortestPathResponse> {
    let start_time = Instant::now();
    let mut engine = ShortestPaths::new(&stored.graph, &stored.weights, VertexId(request.source))?;
    engine.run()?;

    let targets: Vec<VertexId> = match &request.targets {
        Some(targets) => targets.iter().copied().map(VertexId).collect(),
        None => stored.graph.vertices().collect(),
    };

    let mut paths = Vec::with_capacity(targets.len());
    for target in targets {
        paths.push(target_path(&engine, &stored.weights, target)?);
    }

    let mut distances = BTreeMap::new();
    let mut parent_edges = BTreeMap::new();
    for v in stored.graph.vertices() {
        if let Some(d) = engine.distance(v)?.finite() {
            distances.insert(v.index(), d);
        }
        if let Some(edge) = engine.parent_edge(v)? {
            parent_edges.insert(v.index(), edge.index());
        }
    }
    let execution_time = start_time.elapsed();

    let stats = engine.stats();
    Ok(ShortestPathResponse {
        execution_id: Uuid::new_v4(),
        graph_id: stored.id,
        source: request.source,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        distances,
        parent_edges,
        paths,
        metrics: RunMetrics {
            extractions: stats.extractions,
            relaxations: stats.relaxations,
            improvements: stats.improvements,
            heap_inserts: stats.heap.inserts,
            heap_decreases: stats.heap.decreases,
            heap_swaps: stats.heap.swaps,
        },
    })
}

fn target_path(
    engine: &ShortestPaths<'_, DirectedGraph, EdgeWeights<u64>, u64>,
    weights: &EdgeWeights<u64>,
    target: VertexId,
) -> crate::Result<TargetPath> {
    let edges = match engine.return_path(target) {
        Ok(edges) => edges,
        Err(err) if err.is_unreachable() => {
            return Ok(TargetPath {
                target: target.index(),
                reachable: false,
                length: None,
                edges: Vec::new(),
            });
        }
        Err(err) => return Err(err),
    };

    let edges = edges
        .iter()
        .map(|edge| {
            let weight = weights.get(edge.id).ok_or(Error::MissingWeight(edge.id.index()))?;
            Ok(PathEdge {
                id: edge.id.index(),
                from: edge.from.index(),
                to: edge.to.index(),
                weight,
            })
        })
        .collect::<crate::Result<Vec<_>>>()?;

    Ok(TargetPath {
        target: target.index(),
        reachable: true,
        length: Some(engine.return_length(target)?),
        edges,
    })
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (status, Json(ErrorResponse {
        error: error.to_string(),
        message,
        details: None,
    }))
}

fn too_large(message: String) -> ApiError {
    api_error(StatusCode::PAYLOAD_TOO_LARGE, "graph_too_large", message)
}

fn error_response(err: &Error) -> ApiError {
    let (status, code) = match err {
        Error::InvalidVertex(_) => (StatusCode::BAD_REQUEST, "invalid_vertex"),
        Error::InvalidEdge(_, _) => (StatusCode::BAD_REQUEST, "invalid_edge"),
        Error::InvalidGraphParameters(_) => (StatusCode::BAD_REQUEST, "invalid_graph_parameters"),
        Error::SourceNotFound => (StatusCode::BAD_REQUEST, "source_not_found"),
        Error::MissingWeight(_) => (StatusCode::BAD_REQUEST, "missing_weight"),
        Error::Unreachable(_) => (StatusCode::NOT_FOUND, "unreachable"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "algorithm_execution_failed"),
    };
    api_error(status, code, err.to_string())
}
