//! Subnet CIDR Calculator
//!
//! Carves an IPv4 base block into nested network layers for VPC provisioning:
//! - Each layer takes the lower half of the space left by the previous layer
//! - Each layer's block is split evenly across availability zones
//! - Zone counts round up to the next power of two
//!
//! Features:
//! - Pure, stateless partitioning (`validate` / `partition`)
//! - Ordered `LayerN -> "leaf,az0,az1,..."` output
//! - Provisioning event adapter with SUCCESS/FAILED status documents
//! - REST API and CLI front ends
//!
//! # Example
//!
//! ```
//! use subnet_calculator::{AllocationRequest, Partitioner};
//!
//! let request = AllocationRequest::parse("10.0.0.0/16", 2, 2).unwrap();
//! let layers = Partitioner::new().calculate(&request).unwrap();
//!
//! assert_eq!(layers.get("Layer1"), Some("10.0.0.0/17,10.0.0.0/18,10.0.64.0/18"));
//! assert_eq!(layers.get("Layer2"), Some("10.0.128.0/18,10.0.128.0/19,10.0.160.0/19"));
//! ```

pub mod allocator;
pub mod api;
pub mod error;
pub mod models;
pub mod provisioning;

// Re-export core types
pub use allocator::{
    format, partition, validate, CidrPartitioner, LayerMap, PartitionLimits, Partitioner,
};
pub use error::{AllocationError, Error, ParameterError, ParseError, Result};
pub use models::{AllocationRequest, AllocationResult, LayerAllocation};
pub use provisioning::{
    PhysicalResourceId, ProvisioningEvent, ProvisioningHandler, ProvisioningResponse,
    RequestType, ResponseStatus,
};
pub use api::{create_router, start_server, ApiServerConfig, AppState};

/// Default parameter bounds for partition requests
pub mod limits {
    /// Largest base block accepted: /16
    pub const MIN_PREFIX: u8 = 16;

    /// Smallest base block accepted: /28
    pub const MAX_PREFIX: u8 = 28;

    /// Maximum number of network layers
    pub const MAX_LAYERS: u8 = 4;

    /// Maximum number of availability zones
    pub const MAX_ZONES: u8 = 4;
}
