//! Inbound provisioning event

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle action requested by the orchestrator
///
/// Request types this service does not know deserialize as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
    #[serde(other)]
    Other,
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestType::Create => "Create",
            RequestType::Update => "Update",
            RequestType::Delete => "Delete",
            RequestType::Other => "Other",
        };
        f.write_str(name)
    }
}

/// A numeric property that may arrive as a JSON number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(i64),
    Float(f64),
    Text(String),
}

impl PropertyValue {
    /// Interpret the value as a whole-number count
    ///
    /// Only non-numeric text and fractional numbers fail here. Values outside
    /// `i64` saturate so the range check in `validate` still rejects them.
    pub fn as_count(&self, field: &'static str) -> Result<i64, ParseError> {
        let invalid = || ParseError::InvalidNumber {
            field,
            value: self.to_string(),
        };

        match self {
            PropertyValue::Number(n) => Ok(*n),
            PropertyValue::Float(x) if x.is_finite() && x.fract() == 0.0 => Ok(*x as i64),
            PropertyValue::Float(_) => Err(invalid()),
            PropertyValue::Text(s) => parse_integer(s.trim()).ok_or_else(invalid),
        }
    }
}

/// Parse an optionally signed decimal integer, saturating at the `i64` bounds
fn parse_integer(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match text.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if text.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::Float(x) => write!(f, "{}", x),
            PropertyValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Number(n)
    }
}

/// Resource properties supplied with the event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceProperties {
    /// Base block to carve up (e.g., "10.0.0.0/16")
    pub vpc_cidr_block: String,
    /// Number of network layers
    pub network_layers: PropertyValue,
    /// Number of availability zones
    pub zones_required: PropertyValue,
}

/// A provisioning event from the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisioningEvent {
    pub request_type: RequestType,
    #[serde(rename = "ResponseURL", default)]
    pub response_url: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    #[serde(default)]
    pub resource_properties: Option<ResourceProperties>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_event() {
        let event: ProvisioningEvent = serde_json::from_value(json!({
            "RequestType": "Create",
            "ResponseURL": "https://example.invalid/response",
            "StackId": "stack-1",
            "RequestId": "req-1",
            "LogicalResourceId": "SubnetCalc",
            "ResourceProperties": {
                "ServiceToken": "ignored",
                "VpcCidrBlock": "10.0.0.0/16",
                "NetworkLayers": "2",
                "ZonesRequired": 3
            }
        }))
        .unwrap();

        assert_eq!(event.request_type, RequestType::Create);
        assert_eq!(event.response_url, "https://example.invalid/response");
        let props = event.resource_properties.unwrap();
        assert_eq!(props.vpc_cidr_block, "10.0.0.0/16");
        assert_eq!(props.network_layers.as_count("NetworkLayers").unwrap(), 2);
        assert_eq!(props.zones_required.as_count("ZonesRequired").unwrap(), 3);
    }

    #[test]
    fn test_delete_without_properties() {
        let event: ProvisioningEvent = serde_json::from_value(json!({
            "RequestType": "Delete",
            "StackId": "stack-1",
            "RequestId": "req-2",
            "LogicalResourceId": "SubnetCalc"
        }))
        .unwrap();

        assert_eq!(event.request_type, RequestType::Delete);
        assert!(event.resource_properties.is_none());
    }

    #[test]
    fn test_unknown_request_type() {
        let event: ProvisioningEvent = serde_json::from_value(json!({
            "RequestType": "Rollback",
            "StackId": "stack-1",
            "RequestId": "req-3",
            "LogicalResourceId": "SubnetCalc"
        }))
        .unwrap();

        assert_eq!(event.request_type, RequestType::Other);
    }

    #[test]
    fn test_wide_counts_parse() {
        let cases = [
            (json!(-1), -1),
            (json!(256), 256),
            (json!("300"), 300),
            (json!(" -7 "), -7),
            (json!("+4"), 4),
            (json!(2.0), 2),
            (json!("99999999999999999999"), i64::MAX),
            (json!("-99999999999999999999"), i64::MIN),
            (json!(u64::MAX), i64::MAX),
        ];

        for (raw, expected) in cases {
            let value: PropertyValue = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(
                value.as_count("NetworkLayers").unwrap(),
                expected,
                "value = {}",
                raw
            );
        }
    }

    #[test]
    fn test_non_numeric_counts() {
        for raw in [json!("two"), json!(""), json!("-"), json!("2.0"), json!(2.5)] {
            let value: PropertyValue = serde_json::from_value(raw.clone()).unwrap();
            let result = value.as_count("NetworkLayers");
            assert!(
                matches!(result, Err(ParseError::InvalidNumber { field: "NetworkLayers", .. })),
                "expected failure for {}",
                raw
            );
        }
    }
}
