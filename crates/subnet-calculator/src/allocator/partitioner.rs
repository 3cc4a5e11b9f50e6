//! Layered CIDR partitioner
//!
//! Each layer halves whatever space remains: the lower half becomes the
//! layer's leaf and the upper half is carried into the next layer. The leaf
//! is then split into a power-of-two number of AZ subnets. Space skipped by
//! earlier layers is never revisited, so a layer's addresses do not depend on
//! how many layers follow it.

use super::formatter::{format, LayerMap};
use super::validator::{validate, PartitionLimits};
use crate::error::{AllocationError, ParameterError};
use crate::models::{AllocationRequest, AllocationResult, LayerAllocation};
use crate::Result;
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// Trait for layered CIDR partitioning
pub trait CidrPartitioner: Send + Sync {
    /// Check the request parameters before any address arithmetic
    fn validate(&self, request: &AllocationRequest) -> std::result::Result<(), ParameterError>;

    /// Carve the request's base block into layers
    fn partition(
        &self,
        request: &AllocationRequest,
    ) -> std::result::Result<AllocationResult, AllocationError>;
}

/// Stateless partitioner bound to a set of parameter limits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Partitioner {
    limits: PartitionLimits,
}

impl Partitioner {
    /// Create a partitioner with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a partitioner with custom limits
    pub fn with_limits(limits: PartitionLimits) -> Self {
        Self { limits }
    }

    /// Get the configured limits
    pub fn limits(&self) -> &PartitionLimits {
        &self.limits
    }

    /// Validate, partition and format in one call
    pub fn calculate(&self, request: &AllocationRequest) -> Result<LayerMap> {
        self.validate(request)?;
        let result = self.partition(request)?;

        tracing::info!(
            base = %result.base,
            layers = result.len(),
            az_subnets = request.az_subnets_per_layer(),
            "Partitioned address space"
        );

        Ok(format(&result))
    }
}

impl CidrPartitioner for Partitioner {
    fn validate(&self, request: &AllocationRequest) -> std::result::Result<(), ParameterError> {
        validate(request, &self.limits)
    }

    fn partition(
        &self,
        request: &AllocationRequest,
    ) -> std::result::Result<AllocationResult, AllocationError> {
        partition(request)
    }
}

/// Partition a request's base block into `layer_count` layers
///
/// All-or-nothing: if any layer does not fit in 32 bits no layers are
/// returned.
pub fn partition(
    request: &AllocationRequest,
) -> std::result::Result<AllocationResult, AllocationError> {
    let base = request.normalized_base();
    let az_exponent = u32::from(request.az_exponent());
    let mut remaining = base;
    let mut layers = Vec::with_capacity(request.layer_count.clamp(0, 32) as usize);

    for count in 1..=request.layer_count {
        // Past layer 32 the prefix check below always fails, so the index fits a u8
        let index = u8::try_from(count).unwrap_or(u8::MAX);
        let layer_prefix = u32::from(base.prefix_len()) + u32::from(index);
        if layer_prefix > 32 {
            return Err(AllocationError::LayerDepthExceeded {
                layer: index,
                prefix: clamp_prefix(layer_prefix),
            });
        }
        let layer_prefix = layer_prefix as u8;

        let (leaf, upper) = halve(remaining, layer_prefix).ok_or(
            AllocationError::LayerDepthExceeded {
                layer: index,
                prefix: layer_prefix,
            },
        )?;
        remaining = upper;

        let az_prefix = u32::from(layer_prefix) + az_exponent;
        let zone_error = AllocationError::ZoneSplitExceeded {
            layer: index,
            prefix: clamp_prefix(az_prefix),
        };
        if az_prefix > 32 {
            return Err(zone_error);
        }

        let az_blocks: Vec<Ipv4Net> = leaf
            .subnets(az_prefix as u8)
            .map_err(|_| zone_error)?
            .collect();

        tracing::debug!(
            layer = index,
            leaf = %leaf,
            remaining = %remaining,
            az_blocks = az_blocks.len(),
            "Allocated layer"
        );

        layers.push(LayerAllocation {
            index,
            leaf,
            az_blocks,
        });
    }

    Ok(AllocationResult { base, layers })
}

/// Split a block into its lower and upper halves at `prefix_len`
///
/// `block` must have prefix `prefix_len - 1`.
fn halve(block: Ipv4Net, prefix_len: u8) -> Option<(Ipv4Net, Ipv4Net)> {
    if prefix_len == 0 || block.prefix_len() + 1 != prefix_len {
        return None;
    }

    let half_size = 1u32 << (32 - prefix_len);
    let lower_start = u32::from(block.network());
    let upper_start = lower_start.checked_add(half_size)?;

    let lower = Ipv4Net::new(Ipv4Addr::from(lower_start), prefix_len).ok()?;
    let upper = Ipv4Net::new(Ipv4Addr::from(upper_start), prefix_len).ok()?;
    Some((lower, upper))
}

/// Prefix value reported in errors
fn clamp_prefix(prefix: u32) -> u8 {
    prefix.min(u32::from(u8::MAX)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn request(cidr: &str, layers: i64, zones: i64) -> AllocationRequest {
        AllocationRequest::parse(cidr, layers, zones).unwrap()
    }

    fn strings(blocks: &[Ipv4Net]) -> Vec<String> {
        blocks.iter().map(|b| b.to_string()).collect()
    }

    #[test]
    fn test_two_layers_two_zones() {
        let result = partition(&request("10.0.0.0/16", 2, 2)).unwrap();
        assert_eq!(result.len(), 2);

        let layer1 = result.layer(1).unwrap();
        assert_eq!(layer1.leaf.to_string(), "10.0.0.0/17");
        assert_eq!(
            strings(&layer1.az_blocks),
            vec!["10.0.0.0/18", "10.0.64.0/18"]
        );

        let layer2 = result.layer(2).unwrap();
        assert_eq!(layer2.leaf.to_string(), "10.0.128.0/18");
        assert_eq!(
            strings(&layer2.az_blocks),
            vec!["10.0.128.0/19", "10.0.160.0/19"]
        );
    }

    #[test]
    fn test_single_zone_keeps_leaf() {
        let result = partition(&request("192.168.0.0/24", 1, 1)).unwrap();
        let layer = result.layer(1).unwrap();
        assert_eq!(layer.leaf.to_string(), "192.168.0.0/25");
        assert_eq!(strings(&layer.az_blocks), vec!["192.168.0.0/25"]);
    }

    #[test]
    fn test_three_zones_round_up_to_four() {
        let result = partition(&request("10.1.0.0/16", 1, 3)).unwrap();
        let layer = result.layer(1).unwrap();
        assert_eq!(
            strings(&layer.az_blocks),
            vec!["10.1.0.0/19", "10.1.32.0/19", "10.1.64.0/19", "10.1.96.0/19"]
        );
    }

    #[test]
    fn test_host_bits_are_normalized() {
        let result = partition(&request("10.0.200.17/16", 1, 2)).unwrap();
        assert_eq!(result.base.to_string(), "10.0.0.0/16");
        assert_eq!(result.layer(1).unwrap().leaf.to_string(), "10.0.0.0/17");
    }

    #[test]
    fn test_leaf_prefix_tracks_layer_index() {
        let result = partition(&request("10.20.0.0/20", 4, 4)).unwrap();
        for layer in &result {
            assert_eq!(layer.leaf.prefix_len(), 20 + layer.index);
            assert_eq!(layer.az_blocks.len(), 4);
        }
    }

    #[test]
    fn test_earlier_layers_independent_of_depth() {
        let shallow = partition(&request("10.0.0.0/18", 1, 2)).unwrap();
        let deep = partition(&request("10.0.0.0/18", 4, 2)).unwrap();
        assert_eq!(shallow.layers[0], deep.layers[0]);
    }

    #[test]
    fn test_zone_split_exceeds_space() {
        let result = partition(&request("10.0.0.0/28", 4, 4));
        assert_eq!(
            result,
            Err(AllocationError::ZoneSplitExceeded {
                layer: 3,
                prefix: 33
            })
        );
    }

    #[test]
    fn test_layer_depth_exceeds_space() {
        let result = partition(&request("10.0.0.0/31", 2, 1));
        assert_eq!(
            result,
            Err(AllocationError::LayerDepthExceeded {
                layer: 2,
                prefix: 33
            })
        );
    }

    #[test]
    fn test_unvalidated_counts() {
        let result = partition(&request("10.0.0.0/16", 300, 1));
        assert_eq!(
            result,
            Err(AllocationError::LayerDepthExceeded {
                layer: 17,
                prefix: 33
            })
        );

        let result = partition(&request("10.0.0.0/16", -1, 1)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_deepest_fitting_request() {
        // /28 with 4 layers and 1 zone ends exactly at /32
        let result = partition(&request("10.0.0.0/28", 4, 1)).unwrap();
        let last = result.layer(4).unwrap();
        assert_eq!(last.leaf.to_string(), "10.0.0.14/32");
        assert_eq!(strings(&last.az_blocks), vec!["10.0.0.14/32"]);
    }

    #[test]
    fn test_halve() {
        let block: Ipv4Net = "10.0.128.0/17".parse().unwrap();
        let (lower, upper) = halve(block, 18).unwrap();
        assert_eq!(lower.to_string(), "10.0.128.0/18");
        assert_eq!(upper.to_string(), "10.0.192.0/18");

        assert!(halve(block, 19).is_none());
    }

    #[test]
    fn test_calculate_validates_first() {
        let partitioner = Partitioner::new();
        let result = partitioner.calculate(&request("10.0.0.0/29", 1, 1));
        assert!(matches!(result, Err(Error::Parameter(_))));

        let result = partitioner.calculate(&request("10.0.0.0/28", 4, 4));
        assert!(matches!(result, Err(Error::Allocation(_))));
    }

    #[test]
    fn test_custom_limits() {
        assert_eq!(Partitioner::new().limits(), &PartitionLimits::default());

        let partitioner = Partitioner::with_limits(PartitionLimits {
            min_prefix: 8,
            ..PartitionLimits::default()
        });
        assert_eq!(partitioner.limits().min_prefix, 8);

        let layers = partitioner
            .calculate(&request("10.0.0.0/8", 1, 2))
            .unwrap();
        assert_eq!(
            layers.get("Layer1"),
            Some("10.0.0.0/9,10.0.0.0/10,10.64.0.0/10")
        );
        assert!(Partitioner::new()
            .calculate(&request("10.0.0.0/8", 1, 2))
            .is_err());
    }

    #[test]
    fn test_calculate_formats_layers() {
        let partitioner = Partitioner::new();
        let layers = partitioner
            .calculate(&request("10.0.0.0/16", 2, 2))
            .unwrap();
        assert_eq!(
            layers.get("Layer1"),
            Some("10.0.0.0/17,10.0.0.0/18,10.0.64.0/18")
        );
        assert_eq!(
            layers.get("Layer2"),
            Some("10.0.128.0/18,10.0.128.0/19,10.0.160.0/19")
        );
    }
}
