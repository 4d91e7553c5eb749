//! Shipping rate configuration module

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::env_or;

/// Shipping prices, in the store currency
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShippingConfig {
    /// Courier delivery inside the capital
    #[serde(default)]
    pub courier_capital_rate: Decimal,

    /// Courier delivery elsewhere in the home country
    #[serde(default = "default_courier_rate")]
    pub courier_rate: Decimal,

    /// Postal delivery inside the home country
    #[serde(default = "default_postal_domestic_rate")]
    pub postal_domestic_rate: Decimal,

    /// Postal delivery abroad
    #[serde(default = "default_postal_international_rate")]
    pub postal_international_rate: Decimal,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            courier_capital_rate: Decimal::ZERO,
            courier_rate: default_courier_rate(),
            postal_domestic_rate: default_postal_domestic_rate(),
            postal_international_rate: default_postal_international_rate(),
        }
    }
}

impl ShippingConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            courier_capital_rate: env_or("SHIPPING_COURIER_CAPITAL_RATE", Decimal::ZERO),
            courier_rate: env_or("SHIPPING_COURIER_RATE", default_courier_rate()),
            postal_domestic_rate: env_or(
                "SHIPPING_POSTAL_DOMESTIC_RATE",
                default_postal_domestic_rate(),
            ),
            postal_international_rate: env_or(
                "SHIPPING_POSTAL_INTERNATIONAL_RATE",
                default_postal_international_rate(),
            ),
        }
    }
}

fn default_courier_rate() -> Decimal {
    Decimal::from(20)
}

fn default_postal_domestic_rate() -> Decimal {
    Decimal::from(10)
}

fn default_postal_international_rate() -> Decimal {
    Decimal::from(30)
}
