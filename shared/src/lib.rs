//! Shared utilities and common types for HardwareHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Utility functions (text matching, validation)
//! - Common type definitions

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, CatalogConfig, CorsConfig, Environment, LoggingConfig,
    ServerConfig, ShippingConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, HealthResponse, HealthStatus, PaginatedResponse, Pagination};
pub use utils::{text, validation};
