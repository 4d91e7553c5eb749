use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hw_core::domain::entities::ConfigurationItem;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct ItemRequest {
    pub component_id: Uuid,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, max = 16))]
    pub quantity: u32,
}

impl From<ItemRequest> for ConfigurationItem {
    fn from(item: ItemRequest) -> Self {
        ConfigurationItem::new(item.component_id, item.quantity)
    }
}

fn default_quantity() -> u32 {
    1
}

/// Convert validated request items to domain items
pub fn to_items(items: &[ItemRequest]) -> Vec<ConfigurationItem> {
    items.iter().copied().map(ConfigurationItem::from).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(length(min = 1, max = 32), nested)]
    pub items: Vec<ItemRequest>,
}

/// Query string of `GET /configurator/psu`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PsuQuery {
    pub watts: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PsuResponse {
    pub watts: f64,
    /// Tier label, e.g. "650W", or "N/A"
    pub recommended: String,
    /// Minimum rated output of the tier
    pub rated_watts: Option<u32>,
}
