//! Allocation request model

use crate::error::ParseError;
use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A request to carve a base block into layers and AZ subnets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Base address block, host bits may still be set
    pub base: Ipv4Net,
    /// Number of nested layers to split off, range checked by `validate`
    pub layer_count: i64,
    /// Number of availability zones each layer must serve, range checked by `validate`
    pub az_count: i64,
}

impl AllocationRequest {
    /// Create a new request from an already parsed block
    pub fn new(base: Ipv4Net, layer_count: i64, az_count: i64) -> Self {
        Self {
            base,
            layer_count,
            az_count,
        }
    }

    /// Create a request from a `"<address>/<prefix>"` string
    pub fn parse(base: &str, layer_count: i64, az_count: i64) -> Result<Self, ParseError> {
        let trimmed = base.trim();
        if !trimmed.contains('/') {
            return Err(ParseError::invalid_cidr(base, "missing prefix length"));
        }
        let base = Ipv4Net::from_str(trimmed).map_err(|e| ParseError::invalid_cidr(base, e))?;
        Ok(Self::new(base, layer_count, az_count))
    }

    /// Prefix length of the base block
    pub fn prefix_len(&self) -> u8 {
        self.base.prefix_len()
    }

    /// Base block with all host bits zeroed
    pub fn normalized_base(&self) -> Ipv4Net {
        self.base.trunc()
    }

    /// Number of extra prefix bits needed to serve `az_count` zones
    ///
    /// Rounds up to the next power of two, so 3 zones yield 4 subnets.
    pub fn az_exponent(&self) -> u8 {
        let zones = self.az_count.max(1).unsigned_abs();
        zones.next_power_of_two().trailing_zeros() as u8
    }

    /// Number of AZ subnets every layer will contain
    pub fn az_subnets_per_layer(&self) -> u64 {
        1u64 << self.az_exponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let req = AllocationRequest::parse("10.0.0.0/16", 2, 2).unwrap();
        assert_eq!(req.base.to_string(), "10.0.0.0/16");
        assert_eq!(req.prefix_len(), 16);
        assert_eq!(req.layer_count, 2);
        assert_eq!(req.az_count, 2);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let req = AllocationRequest::parse("  172.16.0.0/20 ", 1, 1).unwrap();
        assert_eq!(req.base.to_string(), "172.16.0.0/20");
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "10.0.0.0", "10.0.0/16", "10.0.0.0/33", "300.0.0.0/16", "cidr"] {
            let result = AllocationRequest::parse(input, 1, 1);
            assert!(
                matches!(result, Err(ParseError::InvalidCidr { .. })),
                "expected parse failure for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_normalized_base() {
        let req = AllocationRequest::parse("10.0.37.5/16", 1, 1).unwrap();
        assert_eq!(req.normalized_base().to_string(), "10.0.0.0/16");
    }

    #[test]
    fn test_az_exponent_rounds_up() {
        let expected = [(1i64, 0u8), (2, 1), (3, 2), (4, 2), (300, 9)];
        for (zones, exponent) in expected {
            let req = AllocationRequest::parse("10.0.0.0/16", 1, zones).unwrap();
            assert_eq!(req.az_exponent(), exponent, "zones = {}", zones);
        }

        let req = AllocationRequest::parse("10.0.0.0/16", 1, 3).unwrap();
        assert_eq!(req.az_subnets_per_layer(), 4);
    }
}
