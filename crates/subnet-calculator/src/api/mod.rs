//! REST API for subnet calculation
//!
//! Provides HTTP endpoints for partitioning address space and for handling
//! provisioning events.
//!
//! # Endpoints
//!
//! ## Partitioning
//! - `POST /api/v1/partition` - Partition a base block into layers
//!
//! ## Provisioning
//! - `POST /api/v1/provision` - Handle a provisioning event, returns the status document
//!
//! ## Health
//! - `GET /health` - Liveness, reports the physical resource id
//! - `GET /ready` - Readiness, reports the active partition limits

pub mod dto;
pub mod handlers;
pub mod router;
pub mod state;

pub use dto::*;
pub use router::{create_router, ApiServerConfig};
pub use state::AppState;

use std::sync::Arc;

/// Start the API server
///
/// # Example
///
/// ```ignore
/// use subnet_calculator::api::{start_server, AppState, ApiServerConfig};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() {
///     let state = Arc::new(AppState::new());
///     let config = ApiServerConfig::default();
///     start_server(state, config).await.unwrap();
/// }
/// ```
pub async fn start_server(
    state: Arc<AppState>,
    config: ApiServerConfig,
) -> Result<(), std::io::Error> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr()).await?;

    tracing::info!("Starting API server on {}", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
