use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState, GraphLimits};

/// Configuration for the web server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    /// Maximum number of graphs kept in memory
    pub max_graphs: usize,
    /// Largest vertex count accepted for an uploaded or generated graph
    pub max_vertices: usize,
    /// Largest edge count accepted for an uploaded or generated graph
    pub max_edges: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3005,
            enable_cors: true,
            max_graphs: 1000,
            max_vertices: 1_000_000,
            max_edges: 10_000_000,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `SPATH_HOST`, `SPATH_PORT`, `SPATH_ENABLE_CORS`,
    /// `SPATH_MAX_GRAPHS`, `SPATH_MAX_VERTICES` and `SPATH_MAX_EDGES`.
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).map(|value| value.trim().to_string());

        Self {
            host: parse("SPATH_HOST").and_then(|v| v.parse().ok()).unwrap_or(defaults.host),
            port: parse("SPATH_PORT").and_then(|v| v.parse().ok()).unwrap_or(defaults.port),
            enable_cors: parse("SPATH_ENABLE_CORS")
                .and_then(|v| match v.to_ascii_lowercase().as_str() {
                    "1" | "true" | "yes" | "on" => Some(true),
                    "0" | "false" | "no" | "off" => Some(false),
                    _ => None,
                })
                .unwrap_or(defaults.enable_cors),
            max_graphs: parse("SPATH_MAX_GRAPHS").and_then(|v| v.parse().ok()).unwrap_or(defaults.max_graphs),
            max_vertices: parse("SPATH_MAX_VERTICES").and_then(|v| v.parse().ok()).unwrap_or(defaults.max_vertices),
            max_edges: parse("SPATH_MAX_EDGES").and_then(|v| v.parse().ok()).unwrap_or(defaults.max_edges),
        }
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Build the application router with its state and middleware
pub fn build_app(config: &ServerConfig) -> Router {
    let limits = GraphLimits {
        max_vertices: config.max_vertices,
        max_edges: config.max_edges,
    };
    let app = create_router().with_state(AppState::new(config.max_graphs, limits));

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
        app.layer(cors)
    } else {
        app
    }
}

/// Start the web server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);
    let addr = config.address();

    info!("spath server starting on http://{}", addr);
    info!("CORS enabled: {}, max graphs: {}", config.enable_cors, config.max_graphs);
    info!("Graph limits: {} vertices, {} edges", config.max_vertices, config.max_edges);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
