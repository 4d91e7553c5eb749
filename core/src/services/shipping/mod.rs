//! Shipping rate calculation for checkout

mod calculator;

#[cfg(test)]
mod tests;

pub use calculator::{calculate_shipping_rates, ShippingCalculator, ShippingRateTable};
