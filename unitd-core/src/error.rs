//! Structured errors for unit-aware arithmetic
//!
//! Every failure is local and synchronous: nothing is retried and nothing
//! degrades into a partial result. Each variant names the identifiers or
//! values that caused it, and carries a stable machine-readable code.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const INVALID_IDENTIFIER: &str = "INVALID_IDENTIFIER";
    pub const INVALID_SCALE: &str = "INVALID_SCALE";
    pub const DUPLICATE_UNIT: &str = "DUPLICATE_UNIT";
    pub const DUPLICATE_OPERATION: &str = "DUPLICATE_OPERATION";
    pub const UNIT_NOT_FOUND: &str = "UNIT_NOT_FOUND";
    pub const UNKNOWN_OPERATION: &str = "UNKNOWN_OPERATION";
    pub const INCOMPARABLE_UNITS: &str = "INCOMPARABLE_UNITS";
    pub const UNSUPPORTED_UNIT_ALGEBRA: &str = "UNSUPPORTED_UNIT_ALGEBRA";
}

/// Which part of a unit registration failed identifier validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    Type,
    Name,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Type => write!(f, "Type"),
            IdentifierKind::Name => write!(f, "Name"),
        }
    }
}

/// Error type for unit registration, measure construction and arithmetic
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum UnitdError {
    /// The value could not be coerced to a finite number.
    /// `input` holds the original, uncoerced input.
    #[error("A number is required, found [{input}]")]
    InvalidValue { input: String },

    #[error("{kind} must be a camel case identifier [{value}]")]
    InvalidIdentifier { kind: IdentifierKind, value: String },

    #[error("Scale for unit [{unit_type}][{name}] must be a positive finite number, found [{scale}]")]
    InvalidScale { unit_type: String, name: String, scale: f64 },

    #[error("Unit already exists [{unit_type}][{name}]")]
    DuplicateUnit { unit_type: String, name: String },

    #[error("Operation [{name}] is already registered")]
    DuplicateOperation { name: String },

    #[error("Unable to find unit [{name}] in [{unit_type}]")]
    UnitNotFound { unit_type: String, name: String },

    #[error("Operation [{name}] is not registered")]
    UnknownOperation { name: String },

    #[error("Unit {left} is not comparable to {right}")]
    IncomparableUnits { left: String, right: String },

    #[error("Operation [{op}] on {left} and {right} requires compound units, which are not supported")]
    UnsupportedUnitAlgebra { op: String, left: String, right: String },
}

impl UnitdError {
    pub fn invalid_value(input: impl fmt::Display) -> Self {
        UnitdError::InvalidValue { input: input.to_string() }
    }

    pub fn incomparable(left: impl fmt::Display, right: impl fmt::Display) -> Self {
        UnitdError::IncomparableUnits {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            UnitdError::InvalidValue { .. } => codes::INVALID_VALUE,
            UnitdError::InvalidIdentifier { .. } => codes::INVALID_IDENTIFIER,
            UnitdError::InvalidScale { .. } => codes::INVALID_SCALE,
            UnitdError::DuplicateUnit { .. } => codes::DUPLICATE_UNIT,
            UnitdError::DuplicateOperation { .. } => codes::DUPLICATE_OPERATION,
            UnitdError::UnitNotFound { .. } => codes::UNIT_NOT_FOUND,
            UnitdError::UnknownOperation { .. } => codes::UNKNOWN_OPERATION,
            UnitdError::IncomparableUnits { .. } => codes::INCOMPARABLE_UNITS,
            UnitdError::UnsupportedUnitAlgebra { .. } => codes::UNSUPPORTED_UNIT_ALGEBRA,
        }
    }
}

/// Result alias used throughout the workspace
pub type Result<T> = std::result::Result<T, UnitdError>;
