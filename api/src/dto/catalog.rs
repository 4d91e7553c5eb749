use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hw_core::domain::entities::{Component, ComponentCategory};
use hw_core::services::normalize_specifications;

/// Query string of `GET /components`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentListQuery {
    /// Category wire name, e.g. `cpu` or `power_supply`
    pub category: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentResponse {
    pub id: Uuid,
    pub category: ComponentCategory,
    pub name: String,
    pub price: Decimal,
    /// Specifications as entered
    pub specifications: BTreeMap<String, String>,
    /// Specifications under canonical keys
    pub normalized_specifications: BTreeMap<String, String>,
    pub stock: u32,
    pub in_stock: bool,
    pub low_stock: bool,
}

impl ComponentResponse {
    pub fn from_component(component: Component, low_stock_threshold: u32) -> Self {
        Self {
            normalized_specifications: normalize_specifications(&component.specifications),
            in_stock: component.is_in_stock(),
            low_stock: component.is_low_stock(low_stock_threshold),
            id: component.id,
            category: component.category,
            name: component.name,
            price: component.price,
            specifications: component.specifications,
            stock: component.stock,
        }
    }
}
