//! Saved configuration workflow: create, submit, review, publish

mod service;

#[cfg(test)]
mod tests;

pub use service::{ConfigurationService, NewConfiguration};
