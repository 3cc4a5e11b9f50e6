//! Data models for subnet calculation

mod allocation;
mod request;

pub use allocation::{AllocationResult, LayerAllocation};
pub use request::AllocationRequest;
