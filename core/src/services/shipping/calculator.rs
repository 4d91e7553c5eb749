//! Shipping rate calculator
//!
//! Courier delivery is offered inside the home country only and is priced
//! by whether the address is in the capital. Postal delivery is always
//! offered and is listed last.

use rust_decimal::Decimal;
use tracing::debug;

use hw_shared::config::ShippingConfig;
use hw_shared::utils::contains_any_ignore_case;

use crate::domain::value_objects::{DeliveryWindow, ShippingAddress, ShippingMethod, ShippingRate};

/// Spellings of the home country
const HOME_COUNTRY_NAMES: &[&str] = &["latvia", "latvija"];

/// Spellings of the capital
const CAPITAL_CITY_NAMES: &[&str] = &["riga", "rīga"];

/// Prices and delivery windows used by the calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingRateTable {
    pub courier_capital: Decimal,
    pub courier: Decimal,
    pub postal_domestic: Decimal,
    pub postal_international: Decimal,
    pub courier_capital_days: DeliveryWindow,
    pub courier_days: DeliveryWindow,
    pub postal_domestic_days: DeliveryWindow,
    pub postal_international_days: DeliveryWindow,
}

impl Default for ShippingRateTable {
    fn default() -> Self {
        Self::from(&ShippingConfig::default())
    }
}

impl From<&ShippingConfig> for ShippingRateTable {
    fn from(config: &ShippingConfig) -> Self {
        Self {
            courier_capital: config.courier_capital_rate,
            courier: config.courier_rate,
            postal_domestic: config.postal_domestic_rate,
            postal_international: config.postal_international_rate,
            courier_capital_days: DeliveryWindow::new(1, 1),
            courier_days: DeliveryWindow::new(1, 2),
            postal_domestic_days: DeliveryWindow::new(2, 4),
            postal_international_days: DeliveryWindow::new(5, 10),
        }
    }
}

/// Computes the shipping options for an address
#[derive(Debug, Clone, Default)]
pub struct ShippingCalculator {
    table: ShippingRateTable,
}

impl ShippingCalculator {
    pub fn new(table: ShippingRateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ShippingRateTable {
        &self.table
    }

    /// Options for `address`, courier first when available, postal last.
    ///
    /// Never fails: an unrecognized or empty address is treated as an
    /// international, non-capital destination.
    pub fn rates(&self, address: &ShippingAddress) -> Vec<ShippingRate> {
        let domestic = is_domestic(address);
        let capital = is_capital(address);
        let table = &self.table;

        let mut rates = Vec::with_capacity(2);
        if domestic {
            let (price, estimated_days) = if capital {
                (table.courier_capital, table.courier_capital_days)
            } else {
                (table.courier, table.courier_days)
            };
            rates.push(ShippingRate {
                method: ShippingMethod::Courier,
                price,
                estimated_days,
            });
        }

        let (price, estimated_days) = if domestic {
            (table.postal_domestic, table.postal_domestic_days)
        } else {
            (table.postal_international, table.postal_international_days)
        };
        rates.push(ShippingRate {
            method: ShippingMethod::Postal,
            price,
            estimated_days,
        });

        debug!(domestic, capital, options = rates.len(), "Calculated shipping rates");
        rates
    }
}

/// Shipping options for `address` using the default rate table
pub fn calculate_shipping_rates(address: &ShippingAddress) -> Vec<ShippingRate> {
    ShippingCalculator::default().rates(address)
}

fn is_domestic(address: &ShippingAddress) -> bool {
    contains_any_ignore_case(&address.country, HOME_COUNTRY_NAMES)
}

fn is_capital(address: &ShippingAddress) -> bool {
    contains_any_ignore_case(&address.city, CAPITAL_CITY_NAMES)
}
