//! # HardwareHub Core
//!
//! Core business logic and domain layer for the HardwareHub storefront.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Component, ComponentCategory, Configuration, ConfigurationItem, ConfigurationStatus,
};
pub use domain::value_objects::{
    BuildQuote, Caller, CallerRole, CatalogStats, PasswordStrengthResult, ShippingAddress,
    ShippingRate,
};
pub use errors::{CatalogError, ConfigurationError, DomainError, DomainResult, ValidationError};
pub use repositories::{
    ComponentRepository, ConfigurationRepository, InMemoryComponentRepository,
    InMemoryConfigurationRepository,
};
pub use services::{ConfigurationService, ConfiguratorService, ShippingCalculator, StatsService};
