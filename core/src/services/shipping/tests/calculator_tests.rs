//! Unit tests for the shipping calculator

use rust_decimal_macros::dec;

use hw_shared::config::ShippingConfig;

use crate::domain::value_objects::{DeliveryWindow, ShippingAddress, ShippingMethod};
use crate::services::shipping::{calculate_shipping_rates, ShippingCalculator, ShippingRateTable};

fn address(city: &str, country: &str) -> ShippingAddress {
    ShippingAddress::new(city, "Brīvības iela 1", "LV-1010", country)
}

#[test]
fn test_capital_courier_is_free() {
    let rates = calculate_shipping_rates(&address("Rīga", "Latvia"));

    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0].method, ShippingMethod::Courier);
    assert_eq!(rates[0].price, dec!(0));
    assert!(rates[0].is_free());
    assert_eq!(rates[1].method, ShippingMethod::Postal);
    assert_eq!(rates[1].price, dec!(10));
}

#[test]
fn test_ascii_spelling_and_case() {
    let rates = calculate_shipping_rates(&address("RIGA", "latvija"));
    assert_eq!(rates[0].price, dec!(0));
    assert_eq!(rates[0].estimated_days, DeliveryWindow::new(1, 1));
}

#[test]
fn test_domestic_courier_outside_capital() {
    let rates = calculate_shipping_rates(&address("Daugavpils", "Latvia"));

    assert_eq!(rates[0].method, ShippingMethod::Courier);
    assert_eq!(rates[0].price, dec!(20));
    assert_eq!(rates[0].estimated_days, DeliveryWindow::new(1, 2));
    assert_eq!(rates[1].price, dec!(10));
}

#[test]
fn test_international_is_postal_only() {
    let rates = calculate_shipping_rates(&address("Tallinn", "Estonia"));

    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0].method, ShippingMethod::Postal);
    assert_eq!(rates[0].price, dec!(30));
    assert_eq!(rates[0].estimated_days, DeliveryWindow::new(5, 10));
}

#[test]
fn test_capital_name_abroad_is_still_international() {
    let rates = calculate_shipping_rates(&address("Riga", "Germany"));
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0].price, dec!(30));
}

#[test]
fn test_empty_address_falls_through() {
    let rates = calculate_shipping_rates(&ShippingAddress::default());
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0].method, ShippingMethod::Postal);
    assert_eq!(rates[0].price, dec!(30));
}

#[test]
fn test_configured_table() {
    let config = ShippingConfig {
        courier_capital_rate: dec!(2.50),
        courier_rate: dec!(15),
        postal_domestic_rate: dec!(7.99),
        postal_international_rate: dec!(24),
    };
    let calculator = ShippingCalculator::new(ShippingRateTable::from(&config));

    let capital = calculator.rates(&address("Rīga", "Latvia"));
    assert_eq!(capital[0].price, dec!(2.50));
    assert_eq!(capital[1].price, dec!(7.99));

    let abroad = calculator.rates(&address("Vilnius", "Lithuania"));
    assert_eq!(abroad[0].price, dec!(24));
}

#[test]
fn test_repeatable() {
    let addr = address("Jelgava", "Latvia");
    assert_eq!(calculate_shipping_rates(&addr), calculate_shipping_rates(&addr));
}
