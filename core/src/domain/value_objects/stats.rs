//! Storefront statistics snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::entities::ComponentCategory;

/// Catalog statistics as shown on the storefront dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub component_count: u64,
    pub out_of_stock_count: u64,
    pub low_stock_count: u64,
    pub category_counts: BTreeMap<ComponentCategory, u64>,
    pub public_configuration_count: u64,
    pub generated_at: DateTime<Utc>,
}
