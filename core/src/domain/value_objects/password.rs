//! Password strength result types

use serde::{Deserialize, Serialize};

/// Qualitative strength level derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// Level for a 0-5 score: weak up to 2, fair 3, good 4, strong 5
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::Weak,
            3 => StrengthLevel::Fair,
            4 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Fair => "fair",
            StrengthLevel::Good => "good",
            StrengthLevel::Strong => "strong",
        }
    }
}

/// Which of the five rules a password satisfies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRequirements {
    pub min_length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordRequirements {
    /// Number of satisfied rules
    pub fn satisfied(&self) -> u8 {
        [
            self.min_length,
            self.lowercase,
            self.uppercase,
            self.number,
            self.special,
        ]
        .into_iter()
        .filter(|met| *met)
        .count() as u8
    }
}

/// Outcome of evaluating a candidate password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrengthResult {
    pub score: u8,
    pub level: StrengthLevel,
    pub requirements: PasswordRequirements,
    pub is_valid: bool,
}
