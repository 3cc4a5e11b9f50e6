//! API router and server configuration

use super::dto::{HealthResponse, ReadinessResponse};
use super::handlers;
use super::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Build the router for the calculator endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/partition", post(handlers::partition))
        .route("/provision", post(handlers::provision));

    Router::new()
        .nest("/api/v1", api)
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        physical_resource_id: state.provisioning.physical_resource_id().to_string(),
    })
}

/// Ready as soon as the state exists; reports the limits requests are checked against
async fn ready(State(state): State<Arc<AppState>>) -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        status: "ready",
        limits: *state.partitioner.limits(),
    })
}

/// Listen address for `start_server`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiServerConfig {
    /// Read `API_HOST` and `API_PORT`, falling back to `0.0.0.0:8080`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup("API_HOST") {
            config.host = host;
        }
        if let Some(raw) = lookup("API_PORT") {
            match raw.parse() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!(value = %raw, "Ignoring invalid API_PORT"),
            }
        }
        config
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
