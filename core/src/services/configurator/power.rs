//! Power supply sizing

use serde::{Deserialize, Serialize};
use std::fmt;

use super::selection::SelectedComponent;

/// Recommended power supply rating for an estimated load
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PsuTier {
    #[serde(rename = "N/A")]
    NotApplicable,
    #[serde(rename = "450W")]
    W450,
    #[serde(rename = "550W")]
    W550,
    #[serde(rename = "650W")]
    W650,
    #[serde(rename = "750W")]
    W750,
    #[serde(rename = "850W")]
    W850,
    #[serde(rename = "1000W+")]
    W1000Plus,
}

impl PsuTier {
    /// Tier for a total load in watts. Each threshold is an inclusive upper
    /// bound; loads that are not positive (or not a number) have no tier.
    pub fn for_load(total_watts: f64) -> Self {
        if total_watts.is_nan() || total_watts <= 0.0 {
            PsuTier::NotApplicable
        } else if total_watts <= 300.0 {
            PsuTier::W450
        } else if total_watts <= 400.0 {
            PsuTier::W550
        } else if total_watts <= 500.0 {
            PsuTier::W650
        } else if total_watts <= 650.0 {
            PsuTier::W750
        } else if total_watts <= 800.0 {
            PsuTier::W850
        } else {
            PsuTier::W1000Plus
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PsuTier::NotApplicable => "N/A",
            PsuTier::W450 => "450W",
            PsuTier::W550 => "550W",
            PsuTier::W650 => "650W",
            PsuTier::W750 => "750W",
            PsuTier::W850 => "850W",
            PsuTier::W1000Plus => "1000W+",
        }
    }

    /// Minimum rated output of a supply in this tier
    pub fn rated_watts(&self) -> Option<u32> {
        match self {
            PsuTier::NotApplicable => None,
            PsuTier::W450 => Some(450),
            PsuTier::W550 => Some(550),
            PsuTier::W650 => Some(650),
            PsuTier::W750 => Some(750),
            PsuTier::W850 => Some(850),
            PsuTier::W1000Plus => Some(1000),
        }
    }
}

impl fmt::Display for PsuTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommended PSU label ("450W" ... "1000W+", or "N/A") for a total load
pub fn recommended_psu_wattage(total_watts: f64) -> &'static str {
    PsuTier::for_load(total_watts).label()
}

/// Sum of the declared power draw of every selected unit
pub fn estimate_power_draw(selection: &[SelectedComponent]) -> u32 {
    selection
        .iter()
        .filter_map(|selected| {
            selected
                .declared_power_draw()
                .map(|watts| watts.saturating_mul(selected.quantity))
        })
        .fold(0u32, u32::saturating_add)
}
