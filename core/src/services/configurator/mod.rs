//! PC configurator: pricing, power estimation and compatibility checks
//!
//! This module turns a list of selected components into a priced quote:
//! - PSU wattage tiers and power draw estimation
//! - Component compatibility checks (socket, memory type, PSU headroom)
//! - Quote assembly over the component repository

mod compatibility;
mod power;
mod selection;
mod service;


pub use compatibility::check_compatibility;
pub use power::{estimate_power_draw, recommended_psu_wattage, PsuTier};
pub use selection::SelectedComponent;
pub use service::ConfiguratorService;
