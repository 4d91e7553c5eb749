//! Selected component with normalized specifications

use std::collections::BTreeMap;

use hw_shared::utils::leading_number;

use crate::domain::entities::{Component, ComponentCategory};
use crate::services::specs::normalize_specifications;

/// A component picked for a build, with its specification keys normalized
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedComponent {
    pub component: Component,
    pub quantity: u32,
    specs: BTreeMap<String, String>,
}

impl SelectedComponent {
    pub fn new(component: Component, quantity: u32) -> Self {
        let specs = normalize_specifications(&component.specifications);
        Self {
            component,
            quantity,
            specs,
        }
    }

    pub fn category(&self) -> ComponentCategory {
        self.component.category
    }

    /// Specification value under a canonical key
    pub fn spec(&self, canonical_key: &str) -> Option<&str> {
        self.specs.get(canonical_key).map(String::as_str)
    }

    /// Declared draw per unit in watts, from the `tdp` specification
    pub fn declared_power_draw(&self) -> Option<u32> {
        self.spec_watts("tdp")
    }

    /// Rated output of a power supply in watts, from the `wattage` specification
    pub fn rated_output(&self) -> Option<u32> {
        if self.category() != ComponentCategory::PowerSupply {
            return None;
        }
        self.spec_watts("wattage")
    }

    fn spec_watts(&self, key: &str) -> Option<u32> {
        self.spec(key)
            .and_then(leading_number)
            .map(|watts| watts.round() as u32)
    }
}
