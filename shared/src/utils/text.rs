//! Text matching helpers shared by the catalog and shipping logic

use once_cell::sync::Lazy;
use regex::Regex;

// Leading decimal number, optionally followed by a unit ("650W", " 65.5 w")
static LEADING_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)").unwrap()
});

/// True when `haystack` contains any of `needles`, ignoring case (Unicode
/// aware, so "RĪGA" contains "rīga")
pub fn contains_any_ignore_case(haystack: &str, needles: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    needles
        .iter()
        .any(|needle| haystack.contains(&needle.to_lowercase()))
}

/// Parse the number a free-form value starts with
pub fn leading_number(value: &str) -> Option<f64> {
    LEADING_NUMBER_REGEX
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
