//! Application state for the API
//!
//! Holds shared state across all API handlers.

use crate::allocator::Partitioner;
use crate::provisioning::{PhysicalResourceId, ProvisioningHandler};

/// Application state shared across handlers
///
/// Everything here is immutable, so no locking is needed.
pub struct AppState {
    /// Partitioner used for direct partition requests
    pub partitioner: Partitioner,
    /// Handler for provisioning events
    pub provisioning: ProvisioningHandler,
}

impl AppState {
    /// Create new application state with a freshly generated resource id
    pub fn new() -> Self {
        Self::with_resource_id(PhysicalResourceId::generate())
    }

    /// Create with a specific physical resource id
    pub fn with_resource_id(id: PhysicalResourceId) -> Self {
        let partitioner = Partitioner::new();
        Self {
            partitioner,
            provisioning: ProvisioningHandler::with_partitioner(partitioner, id),
        }
    }

    /// Create with all custom components
    pub fn with_components(partitioner: Partitioner, provisioning: ProvisioningHandler) -> Self {
        Self {
            partitioner,
            provisioning,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
