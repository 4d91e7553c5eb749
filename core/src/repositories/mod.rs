//! Repository interfaces and their in-memory implementations.

pub mod component;
pub mod configuration;

pub use component::{ComponentRepository, InMemoryComponentRepository};
pub use configuration::{ConfigurationRepository, InMemoryConfigurationRepository};
