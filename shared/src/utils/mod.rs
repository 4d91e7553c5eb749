//! Common utility functions

pub mod text;
pub mod validation;

pub use text::*;
pub use validation::validators;
