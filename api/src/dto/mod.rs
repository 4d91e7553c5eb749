//! Request and response bodies of the HTTP API

pub mod auth;
pub mod catalog;
pub mod configuration;
pub mod configurator;
pub mod error;
pub mod shipping;
pub mod specs;

pub use error::{ErrorResponse, ErrorResponseExt};
