//! Catalog configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Catalog reporting settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Stock level at or below which a component counts as "low stock"
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,

    /// Default page size for catalog listings
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
            default_page_size: default_page_size(),
        }
    }
}

impl CatalogConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            low_stock_threshold: env_or("LOW_STOCK_THRESHOLD", default_low_stock_threshold()),
            default_page_size: env_or("CATALOG_PAGE_SIZE", default_page_size()),
        }
    }
}

fn default_low_stock_threshold() -> u32 {
    5
}

fn default_page_size() -> u32 {
    20
}
