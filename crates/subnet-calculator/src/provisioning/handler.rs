//! Provisioning event handler

use super::event::{ProvisioningEvent, RequestType, ResourceProperties};
use super::response::{ProvisioningResponse, ResponseStatus};
use crate::allocator::{LayerMap, Partitioner};
use crate::error::ParseError;
use crate::models::AllocationRequest;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix for generated physical resource ids
const RESOURCE_ID_PREFIX: &str = "SubnetCidrCalculator";

/// Identifier reported back for the resource a handler manages
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhysicalResourceId(String);

impl PhysicalResourceId {
    /// Generate a fresh id (`SubnetCidrCalculator-<uuid>`)
    pub fn generate() -> Self {
        Self(format!("{}-{}", RESOURCE_ID_PREFIX, Uuid::new_v4()))
    }

    /// Use a caller supplied id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhysicalResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handles provisioning events for one physical resource
#[derive(Debug, Clone)]
pub struct ProvisioningHandler {
    partitioner: Partitioner,
    physical_resource_id: PhysicalResourceId,
    log_reference: Option<String>,
}

impl ProvisioningHandler {
    /// Create a handler with the default partition limits
    pub fn new(physical_resource_id: PhysicalResourceId) -> Self {
        Self::with_partitioner(Partitioner::new(), physical_resource_id)
    }

    /// Create a handler with a custom partitioner
    pub fn with_partitioner(
        partitioner: Partitioner,
        physical_resource_id: PhysicalResourceId,
    ) -> Self {
        Self {
            partitioner,
            physical_resource_id,
            log_reference: None,
        }
    }

    /// Name the log location reported in every response reason
    pub fn with_log_reference(mut self, reference: impl Into<String>) -> Self {
        self.log_reference = Some(reference.into());
        self
    }

    pub fn physical_resource_id(&self) -> &PhysicalResourceId {
        &self.physical_resource_id
    }

    /// Handle an event and build the response to relay back
    ///
    /// Only `Create` requests compute anything; `Update` and `Delete`
    /// succeed without data.
    pub fn handle(&self, event: &ProvisioningEvent) -> ProvisioningResponse {
        if event.request_type != RequestType::Create {
            let reason = format!(
                "Nothing to calculate for a {} request",
                event.request_type
            );
            tracing::warn!(
                request_id = %event.request_id,
                request_type = %event.request_type,
                "Ignoring non-create provisioning request"
            );
            return self.respond(event, ResponseStatus::Success, Some(reason), None);
        }

        match self.calculate(event.resource_properties.as_ref()) {
            Ok(layers) => {
                tracing::info!(
                    request_id = %event.request_id,
                    stack_id = %event.stack_id,
                    layers = layers.len(),
                    "Calculated subnet CIDR blocks"
                );
                self.respond(event, ResponseStatus::Success, None, Some(layers))
            }
            Err(err) => {
                tracing::error!(
                    request_id = %event.request_id,
                    error = %err,
                    "Subnet calculation failed"
                );
                let reason = format!("{}: {}", err.kind(), err);
                self.respond(event, ResponseStatus::Failed, Some(reason), None)
            }
        }
    }

    fn calculate(&self, properties: Option<&ResourceProperties>) -> Result<LayerMap> {
        let properties = properties.ok_or(ParseError::MissingProperties)?;

        let layers = properties.network_layers.as_count("NetworkLayers")?;
        let zones = properties.zones_required.as_count("ZonesRequired")?;
        let request = AllocationRequest::parse(&properties.vpc_cidr_block, layers, zones)?;

        self.partitioner.calculate(&request)
    }

    fn respond(
        &self,
        event: &ProvisioningEvent,
        status: ResponseStatus,
        reason: Option<String>,
        data: Option<LayerMap>,
    ) -> ProvisioningResponse {
        let default_reason = self.default_reason();
        let reason = match reason {
            Some(reason) => format!("{}.. {}", reason, default_reason),
            None => default_reason,
        };

        ProvisioningResponse::for_event(
            event,
            status,
            self.physical_resource_id.clone(),
            reason,
            data,
        )
    }

    fn default_reason(&self) -> String {
        match &self.log_reference {
            Some(reference) => format!("See the details in {}", reference),
            None => "See the details in the subnet calculator logs".to_string(),
        }
    }
}
