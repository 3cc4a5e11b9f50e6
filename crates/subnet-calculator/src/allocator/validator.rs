//! Parameter validation for partition requests

use crate::error::ParameterError;
use crate::models::AllocationRequest;
use serde::{Deserialize, Serialize};

/// Allowed ranges for partition requests
///
/// Layer and zone counts always start at 1; only the upper bounds vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionLimits {
    /// Smallest accepted base prefix (largest block)
    pub min_prefix: u8,
    /// Largest accepted base prefix (smallest block)
    pub max_prefix: u8,
    /// Maximum number of layers
    pub max_layers: u8,
    /// Maximum number of availability zones
    pub max_zones: u8,
}

impl Default for PartitionLimits {
    fn default() -> Self {
        Self {
            min_prefix: crate::limits::MIN_PREFIX,
            max_prefix: crate::limits::MAX_PREFIX,
            max_layers: crate::limits::MAX_LAYERS,
            max_zones: crate::limits::MAX_ZONES,
        }
    }
}

/// Check a request against the given limits
///
/// Rules are checked in order (prefix, layers, zones) and the first
/// violation is returned. Does not check whether the requested depth
/// fits in 32 bits; the partitioner reports that.
pub fn validate(
    request: &AllocationRequest,
    limits: &PartitionLimits,
) -> Result<(), ParameterError> {
    let prefix = request.prefix_len();
    if prefix < limits.min_prefix || prefix > limits.max_prefix {
        return Err(ParameterError::PrefixOutOfRange {
            prefix,
            min: limits.min_prefix,
            max: limits.max_prefix,
        });
    }

    if request.layer_count < 1 || request.layer_count > i64::from(limits.max_layers) {
        return Err(ParameterError::LayerCountOutOfRange {
            layers: request.layer_count,
            max: limits.max_layers,
        });
    }

    if request.az_count < 1 || request.az_count > i64::from(limits.max_zones) {
        return Err(ParameterError::ZoneCountOutOfRange {
            zones: request.az_count,
            max: limits.max_zones,
        });
    }

    Ok(())
}
