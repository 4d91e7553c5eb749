//! Password strength evaluation for the sign-up form

mod strength;

pub use strength::{evaluate_password_strength, MIN_PASSWORD_LENGTH, SPECIAL_CHARACTERS};
