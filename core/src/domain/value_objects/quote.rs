//! Build quote produced by the configurator

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::ComponentCategory;
use crate::services::configurator::PsuTier;

/// Priced line of a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub component_id: Uuid,
    pub name: String,
    pub category: ComponentCategory,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
    pub in_stock: bool,
}

/// How serious a compatibility finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// The build will not work as selected
    Error,
    /// The build works but something is off
    Warning,
}

/// One compatibility finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityIssue {
    pub severity: IssueSeverity,
    /// Stable machine-readable code, e.g. `socket_mismatch`
    pub code: String,
    pub message: String,
}

impl CompatibilityIssue {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Aggregate view of a set of selected components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildQuote {
    pub lines: Vec<QuoteLine>,
    pub total_price: Decimal,
    pub estimated_wattage: u32,
    pub recommended_psu: PsuTier,
    pub compatibility: Vec<CompatibilityIssue>,
    pub all_in_stock: bool,
}

impl BuildQuote {
    /// True when no finding is an error
    pub fn is_compatible(&self) -> bool {
        self.compatibility
            .iter()
            .all(|issue| issue.severity != IssueSeverity::Error)
    }
}
