//! Cache configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Expiry settings for in-process caches
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// How long storefront statistics stay fresh, in seconds
    #[serde(default = "default_stats_ttl")]
    pub stats_ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stats_ttl_seconds: default_stats_ttl(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            stats_ttl_seconds: env_or("STATS_CACHE_TTL", default_stats_ttl()),
        }
    }

    /// Set the statistics expiry
    pub fn with_stats_ttl(mut self, seconds: u64) -> Self {
        self.stats_ttl_seconds = seconds;
        self
    }

    /// Statistics expiry as a `std::time::Duration`
    pub fn stats_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.stats_ttl_seconds)
    }
}

fn default_stats_ttl() -> u64 {
    300 // 5 minutes
}
