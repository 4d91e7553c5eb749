use serde::{Deserialize, Serialize};
use validator::Validate;

use hw_core::domain::value_objects::PasswordStrengthResult;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordStrengthRequest {
    /// Candidate password; empty is accepted and reported as valid
    #[serde(default)]
    #[validate(length(max = 256))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordStrengthResponse {
    #[serde(flatten)]
    pub result: PasswordStrengthResult,
    /// Qualitative level as a label, e.g. "strong"
    pub label: String,
}

impl From<PasswordStrengthResult> for PasswordStrengthResponse {
    fn from(result: PasswordStrengthResult) -> Self {
        Self {
            label: result.level.as_str().to_string(),
            result,
        }
    }
}
