//! # Error Types
//!
//! Structured error types for mfg_core. Every calculator either returns a
//! fully populated result or one of these errors; there are no partial
//! results.
//!
//! ## Example
//!
//! ```rust
//! use mfg_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(thickness_mm: f64) -> CalcResult<()> {
//!     if thickness_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "thickness_mm",
//!             thickness_mm.to_string(),
//!             "Thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mfg_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Material key is absent from the registry consulted by the calculator
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// An input value violates a geometric or process precondition
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Unit symbol not recognized by a conversion helper
    #[error("Unknown {quantity} unit: {unit}")]
    UnknownUnit { quantity: String, unit: String },

    /// JSON or TOML could not be parsed into the expected shape
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(quantity: impl Into<String>, unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl std::fmt::Display) -> Self {
        CalcError::SerializationError {
            reason: reason.to_string(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err)
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        CalcError::serialization(err)
    }
}
