//! Error types for subnet calculation

use thiserror::Error;

/// Result type for subnet calculator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Input value outside its allowed range
///
/// Always detected before any address arithmetic takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("Illegal prefix length /{prefix}, use a number between {min} and {max} inclusive")]
    PrefixOutOfRange { prefix: u8, min: u8, max: u8 },

    #[error("Illegal number of network layers {layers}, use between 1 and {max} layers inclusive")]
    LayerCountOutOfRange { layers: i64, max: u8 },

    #[error("Illegal number of availability zones {zones}, use a number between 1 and {max} inclusive")]
    ZoneCountOutOfRange { zones: i64, max: u8 },
}

/// Requested subdivision does not fit in the 32-bit address space
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("Requested layer depth exceeds address space: layer {layer} needs /{prefix}")]
    LayerDepthExceeded { layer: u8, prefix: u8 },

    #[error(
        "AZ count exceeds remaining address space at this layer: layer {layer} needs /{prefix}"
    )]
    ZoneSplitExceeded { layer: u8, prefix: u8 },
}

/// Base block is not a valid `address/prefix` pair
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid CIDR '{input}': {reason}")]
    InvalidCidr { input: String, reason: String },

    #[error("Invalid value for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Missing resource properties")]
    MissingProperties,
}

impl ParseError {
    /// Build an invalid CIDR error for the given input
    pub fn invalid_cidr(input: impl Into<String>, reason: impl ToString) -> Self {
        ParseError::InvalidCidr {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

/// Subnet calculator errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

impl Error {
    /// Short name of the error class, used when reporting failures upstream
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Parse(_) => "ParseError",
            Error::Parameter(_) => "ParameterError",
            Error::Allocation(_) => "AllocationError",
        }
    }
}
