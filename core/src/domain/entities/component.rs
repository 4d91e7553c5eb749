//! Component entity representing a single catalog item (CPU, GPU, RAM, ...).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Catalog category a component belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    Cpu,
    Motherboard,
    Memory,
    Gpu,
    Storage,
    PowerSupply,
    Case,
    Cooler,
    Peripheral,
}

impl ComponentCategory {
    /// All categories in catalog display order
    pub const ALL: [ComponentCategory; 9] = [
        ComponentCategory::Cpu,
        ComponentCategory::Motherboard,
        ComponentCategory::Memory,
        ComponentCategory::Gpu,
        ComponentCategory::Storage,
        ComponentCategory::PowerSupply,
        ComponentCategory::Case,
        ComponentCategory::Cooler,
        ComponentCategory::Peripheral,
    ];

    /// Wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentCategory::Cpu => "cpu",
            ComponentCategory::Motherboard => "motherboard",
            ComponentCategory::Memory => "memory",
            ComponentCategory::Gpu => "gpu",
            ComponentCategory::Storage => "storage",
            ComponentCategory::PowerSupply => "power_supply",
            ComponentCategory::Case => "case",
            ComponentCategory::Cooler => "cooler",
            ComponentCategory::Peripheral => "peripheral",
        }
    }

    /// Whether a complete build may contain at most one part of this category
    pub fn is_single_slot(&self) -> bool {
        matches!(
            self,
            ComponentCategory::Cpu
                | ComponentCategory::Motherboard
                | ComponentCategory::PowerSupply
                | ComponentCategory::Case
        )
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComponentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        ComponentCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| format!("Unknown component category: {}", s))
    }
}

/// A catalog item with price, stock and free-form specifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Unique identifier for the component
    pub id: Uuid,

    /// Catalog category
    pub category: ComponentCategory,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Specification map as entered by staff (keys are not normalized)
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,

    /// Units in stock
    pub stock: u32,
}

impl Component {
    /// Creates a new component with no specifications and no stock
    pub fn new(category: ComponentCategory, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            name: name.into(),
            price,
            specifications: BTreeMap::new(),
            stock: 0,
        }
    }

    /// Adds a specification entry
    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.insert(key.into(), value.into());
        self
    }

    /// Sets the stock count
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Checks if at least one unit is available
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Checks if `quantity` units can be supplied
    pub fn has_stock_for(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }

    /// Checks if stock is at or below `threshold` but not exhausted
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.is_in_stock() && self.stock <= threshold
    }

    /// Price for `quantity` units
    pub fn line_price(&self, quantity: u32) -> Decimal {
        self.price * Decimal::from(quantity)
    }
}
