//! Identity of the caller, as supplied by the upstream auth layer

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role granted to the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallerRole {
    #[default]
    Customer,
    Staff,
    Admin,
}

impl CallerRole {
    /// Whether the role may use back-office operations
    pub fn is_staff(&self) -> bool {
        matches!(self, CallerRole::Staff | CallerRole::Admin)
    }
}

impl std::str::FromStr for CallerRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customer" | "user" => Ok(CallerRole::Customer),
            "staff" => Ok(CallerRole::Staff),
            "admin" => Ok(CallerRole::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Caller of a service operation; anonymous callers have no user id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caller {
    pub user_id: Option<Uuid>,
    pub role: CallerRole,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn customer(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            role: CallerRole::Customer,
        }
    }

    pub fn staff(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            role: CallerRole::Staff,
        }
    }

    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}
