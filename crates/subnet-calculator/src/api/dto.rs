//! Data Transfer Objects for the REST API
//!
//! Request and response types for API endpoints.

use crate::allocator::{LayerMap, PartitionLimits};
use serde::{Deserialize, Serialize};

// ============================================================================
// Partition DTOs
// ============================================================================

/// Request to partition a base block
#[derive(Debug, Clone, Deserialize)]
pub struct PartitionDto {
    /// Base CIDR block (e.g., "10.0.0.0/16")
    pub base_block: String,
    /// Number of layers, range checked after parsing
    pub layer_count: i64,
    /// Number of availability zones, range checked after parsing
    pub az_count: i64,
}

/// Partition response
#[derive(Debug, Clone, Serialize)]
pub struct PartitionResponse {
    /// Normalized base block
    pub base_block: String,
    /// AZ subnets carved from every layer
    pub az_subnets_per_layer: u64,
    /// `LayerN -> "leaf,az0,az1,..."` in layer order
    pub layers: LayerMap,
}

// ============================================================================
// Health DTOs
// ============================================================================

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Id reported in every provisioning response
    pub physical_resource_id: String,
}

/// Readiness response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    /// Limits partition requests are validated against
    pub limits: PartitionLimits,
}

// ============================================================================
// Common DTOs
// ============================================================================

/// API error response
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Error code
    pub code: String,
    /// Error message
    pub message: String,
}

impl ApiError {
    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    /// Create an unprocessable request error
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            code: "UNPROCESSABLE".to_string(),
            message: message.into(),
        }
    }
}
