//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types
pub use types::{CatalogError, ConfigurationError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
