//! Domain entities representing core business objects.

pub mod component;
pub mod configuration;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use component::{Component, ComponentCategory};
pub use configuration::{
    Configuration, ConfigurationItem, ConfigurationStatus, MAX_ITEM_QUANTITY,
    MAX_NAME_LENGTH,
};
