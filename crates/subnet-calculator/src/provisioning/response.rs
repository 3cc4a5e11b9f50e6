//! Outbound provisioning status document

use super::event::ProvisioningEvent;
use super::handler::PhysicalResourceId;
use crate::allocator::LayerMap;
use serde::Serialize;

/// Outcome reported to the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// Status document relayed back for a provisioning event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisioningResponse {
    pub status: ResponseStatus,
    pub reason: String,
    pub physical_resource_id: PhysicalResourceId,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    pub data: Option<LayerMap>,
}

impl ProvisioningResponse {
    /// Build a response echoing the event's identifiers
    pub(crate) fn for_event(
        event: &ProvisioningEvent,
        status: ResponseStatus,
        physical_resource_id: PhysicalResourceId,
        reason: String,
        data: Option<LayerMap>,
    ) -> Self {
        Self {
            status,
            reason,
            physical_resource_id,
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            data,
        }
    }

    /// Whether the event was handled successfully
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}
