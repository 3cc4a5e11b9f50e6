//! Address space partitioning
//!
//! Carves a base CIDR block into nested layers:
//! - Parameter validation (prefix, layer and zone bounds)
//! - Binary split of the remaining space per layer
//! - AZ subdivision of each layer's leaf block
//! - Ordered formatting of the resulting layers

mod formatter;
mod partitioner;
mod validator;

pub use formatter::{format, LayerMap};
pub use partitioner::{partition, CidrPartitioner, Partitioner};
pub use validator::{validate, PartitionLimits};
