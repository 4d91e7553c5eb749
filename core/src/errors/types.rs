//! Error types for catalog, configuration and input validation failures
//!
//! Messages here are for logs; the presentation layer chooses what the
//! client sees.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::configuration::ConfigurationStatus;

/// Catalog lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Component not found: {id}")]
    ComponentNotFound { id: Uuid },

    #[error("Configuration not found: {id}")]
    ConfigurationNotFound { id: Uuid },
}

/// Configuration workflow errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Cannot {action} a configuration in status {from}")]
    InvalidTransition {
        from: ConfigurationStatus,
        action: &'static str,
    },

    #[error("Configuration has no components")]
    EmptyConfiguration,
}

/// Validation errors
///
/// These errors represent input validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Out of range: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("Invalid length: {field} (min: {min}, max: {max}, actual: {actual})")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidLength { field, .. } => field,
        }
    }
}
