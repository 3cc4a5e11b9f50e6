//! REST API handlers
//!
//! Implements handlers for partition and provisioning endpoints.

use super::dto::*;
use super::state::AppState;
use crate::models::AllocationRequest;
use crate::provisioning::{ProvisioningEvent, ProvisioningResponse};
use crate::Error;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

/// Convert internal error to API response
fn error_response(err: Error) -> (StatusCode, Json<ApiError>) {
    let (status, error) = match &err {
        Error::Parse(e) => (StatusCode::BAD_REQUEST, ApiError::bad_request(e.to_string())),
        Error::Parameter(e) => (StatusCode::BAD_REQUEST, ApiError::bad_request(e.to_string())),
        Error::Allocation(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::unprocessable(e.to_string()),
        ),
    };

    (status, Json(error))
}

// ============================================================================
// Partition Handlers
// ============================================================================

/// Partition a base block into layers and AZ subnets
pub async fn partition(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PartitionDto>,
) -> Result<Json<PartitionResponse>, (StatusCode, Json<ApiError>)> {
    let request = AllocationRequest::parse(&req.base_block, req.layer_count, req.az_count)
        .map_err(|e| error_response(e.into()))?;

    let layers = state
        .partitioner
        .calculate(&request)
        .map_err(error_response)?;

    Ok(Json(PartitionResponse {
        base_block: request.normalized_base().to_string(),
        az_subnets_per_layer: request.az_subnets_per_layer(),
        layers,
    }))
}

// ============================================================================
// Provisioning Handlers
// ============================================================================

/// Handle a provisioning event and return the status document
///
/// Always answers 200; failures are reported through the document's status.
pub async fn provision(
    State(state): State<Arc<AppState>>,
    Json(event): Json<ProvisioningEvent>,
) -> Json<ProvisioningResponse> {
    Json(state.provisioning.handle(&event))
}
