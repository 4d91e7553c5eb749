//! Configuration entity: a named, priced bundle of components forming a PC build.
//!
//! User-authored builds go through a review before they can be listed
//! publicly:
//!
//! ```text
//! Draft --submit--> PendingReview --approve--> Approved
//!   ^                     |
//!   |                  reject
//!   +------revise------ Rejected
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::ConfigurationError;

/// Maximum length of a configuration name
pub const MAX_NAME_LENGTH: usize = 120;

/// Maximum units of one component in a single build
pub const MAX_ITEM_QUANTITY: u32 = 16;

/// Review status of a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationStatus {
    Draft,
    PendingReview,
    Approved,
    Rejected,
}

impl ConfigurationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigurationStatus::Draft => "draft",
            ConfigurationStatus::PendingReview => "pending_review",
            ConfigurationStatus::Approved => "approved",
            ConfigurationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ConfigurationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationItem {
    pub component_id: Uuid,
    pub quantity: u32,
}

impl ConfigurationItem {
    pub fn new(component_id: Uuid, quantity: u32) -> Self {
        Self {
            component_id,
            quantity,
        }
    }
}

/// A saved PC build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Unique identifier for the configuration
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Optional description shown on the public listing
    pub description: Option<String>,

    /// Author; `None` for store-authored templates
    pub owner_id: Option<Uuid>,

    /// Selected components
    pub items: Vec<ConfigurationItem>,

    /// Total price at the time the build was last priced
    pub total_price: Decimal,

    /// Whether the author wants the build listed publicly
    pub is_public: bool,

    /// Review status
    pub status: ConfigurationStatus,

    /// Reviewer note, set on rejection
    pub review_note: Option<String>,

    /// Staff member who last reviewed the build
    pub reviewed_by: Option<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Configuration {
    /// Creates a new draft configuration
    pub fn new(
        name: impl Into<String>,
        owner_id: Option<Uuid>,
        items: Vec<ConfigurationItem>,
        total_price: Decimal,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            owner_id,
            items,
            total_price,
            is_public: false,
            status: ConfigurationStatus::Draft,
            review_note: None,
            reviewed_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the build as intended for public listing
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    /// Sends a draft to the review queue
    pub fn submit(&mut self) -> Result<(), ConfigurationError> {
        self.expect_status(ConfigurationStatus::Draft, "submit")?;
        if self.items.is_empty() {
            return Err(ConfigurationError::EmptyConfiguration);
        }
        self.status = ConfigurationStatus::PendingReview;
        self.touch();
        Ok(())
    }

    /// Approves a build waiting for review
    pub fn approve(&mut self, reviewer: Uuid) -> Result<(), ConfigurationError> {
        self.expect_status(ConfigurationStatus::PendingReview, "approve")?;
        self.status = ConfigurationStatus::Approved;
        self.review_note = None;
        self.reviewed_by = Some(reviewer);
        self.touch();
        Ok(())
    }

    /// Rejects a build waiting for review
    pub fn reject(
        &mut self,
        reviewer: Uuid,
        note: impl Into<String>,
    ) -> Result<(), ConfigurationError> {
        self.expect_status(ConfigurationStatus::PendingReview, "reject")?;
        self.status = ConfigurationStatus::Rejected;
        self.review_note = Some(note.into());
        self.reviewed_by = Some(reviewer);
        self.touch();
        Ok(())
    }

    /// Replaces the components of a draft or rejected build. A rejected
    /// build goes back to draft.
    pub fn revise(
        &mut self,
        items: Vec<ConfigurationItem>,
        total_price: Decimal,
    ) -> Result<(), ConfigurationError> {
        match self.status {
            ConfigurationStatus::Draft | ConfigurationStatus::Rejected => {
                self.items = items;
                self.total_price = total_price;
                self.status = ConfigurationStatus::Draft;
                self.touch();
                Ok(())
            }
            from => Err(ConfigurationError::InvalidTransition {
                from,
                action: "revise",
            }),
        }
    }

    /// Whether the build appears in the public catalog
    pub fn is_listed(&self) -> bool {
        self.is_public && self.status == ConfigurationStatus::Approved
    }

    fn expect_status(
        &self,
        expected: ConfigurationStatus,
        action: &'static str,
    ) -> Result<(), ConfigurationError> {
        if self.status == expected {
            Ok(())
        } else {
            Err(ConfigurationError::InvalidTransition {
                from: self.status,
                action,
            })
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
