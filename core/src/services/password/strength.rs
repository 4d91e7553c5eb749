//! Password strength scoring
//!
//! Five independent rules each add one point: minimum length, a lowercase
//! letter, an uppercase letter, a digit and a special character.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::value_objects::{PasswordRequirements, PasswordStrengthResult, StrengthLevel};

/// Minimum number of characters for the length rule
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters accepted by the special character rule
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Lowest score accepted as a valid password
const VALID_SCORE: u8 = 3;

static LOWERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").unwrap());

static UPPERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());

static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());

static SPECIAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[{}]", regex::escape(SPECIAL_CHARACTERS))).unwrap()
});

/// Score a candidate password.
///
/// An empty password scores 0 but is reported valid, so an untouched form
/// field is not flagged before the user types anything.
pub fn evaluate_password_strength(password: &str) -> PasswordStrengthResult {
    let requirements = PasswordRequirements {
        min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
        lowercase: LOWERCASE_REGEX.is_match(password),
        uppercase: UPPERCASE_REGEX.is_match(password),
        number: DIGIT_REGEX.is_match(password),
        special: SPECIAL_REGEX.is_match(password),
    };
    let score = requirements.satisfied();

    PasswordStrengthResult {
        score,
        level: StrengthLevel::from_score(score),
        requirements,
        is_valid: password.is_empty() || score >= VALID_SCORE,
    }
}
