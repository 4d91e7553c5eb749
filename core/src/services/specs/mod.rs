//! Specification key normalization

mod normalizer;

pub use normalizer::{canonical_keys, normalize_spec_key, normalize_specifications};
