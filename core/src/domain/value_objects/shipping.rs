//! Shipping value objects

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Destination address as entered at checkout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

impl ShippingAddress {
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }
}

/// Delivery method tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    Courier,
    Postal,
}

/// Estimated delivery time in days, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryWindow {
    pub min_days: u8,
    pub max_days: u8,
}

impl DeliveryWindow {
    pub const fn new(min_days: u8, max_days: u8) -> Self {
        Self { min_days, max_days }
    }
}

/// One shipping option offered for an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRate {
    pub method: ShippingMethod,
    pub price: Decimal,
    pub estimated_days: DeliveryWindow,
}

impl ShippingRate {
    /// Whether the option costs nothing
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }
}
