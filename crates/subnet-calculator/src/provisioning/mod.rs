//! Stack provisioning adapter
//!
//! Translates an orchestrator's custom-resource event into a partition run
//! and builds the status document the orchestrator expects back.
//!
//! ```text
//! ProvisioningEvent ──► ProvisioningHandler ──► Partitioner
//!                               │
//!                               ▼
//!                     ProvisioningResponse (SUCCESS | FAILED)
//! ```
//!
//! Delivering the response to the event's `ResponseURL` is left to the caller.
//!
//! # Usage
//!
//! ```rust,ignore
//! use subnet_calculator::provisioning::{PhysicalResourceId, ProvisioningHandler};
//!
//! let handler = ProvisioningHandler::new(PhysicalResourceId::generate());
//! let response = handler.handle(&event);
//! relay(&event.response_url, &response)?;
//! ```

mod event;
mod handler;
mod response;

pub use event::{PropertyValue, ProvisioningEvent, RequestType, ResourceProperties};
pub use handler::{PhysicalResourceId, ProvisioningHandler};
pub use response::{ProvisioningResponse, ResponseStatus};
