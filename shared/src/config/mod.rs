//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `cache` - Expiry of cached storefront statistics
//! - `catalog` - Stock thresholds used by catalog reporting
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//! - `shipping` - Shipping rate table

pub mod cache;
pub mod catalog;
pub mod environment;
pub mod server;
pub mod shipping;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::CacheConfig;
pub use catalog::CatalogConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};
pub use shipping::ShippingConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Shipping rate configuration
    #[serde(default)]
    pub shipping: ShippingConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            catalog: CatalogConfig::default(),
            shipping: ShippingConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::new("127.0.0.1", 8080),
            cache: CacheConfig::default(),
            catalog: CatalogConfig::default(),
            shipping: ShippingConfig::default(),
            cors: CorsConfig::development(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            cache: CacheConfig::default(),
            catalog: CatalogConfig::default(),
            shipping: ShippingConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let mut config = match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        };

        config.server = ServerConfig::from_env(&config.server);
        config.cache = CacheConfig::from_env();
        config.catalog = CatalogConfig::from_env();
        config.shipping = ShippingConfig::from_env();
        config
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is missing or malformed.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_config() {
        let config = AppConfig::development();
        assert!(config.environment.is_development());
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_production_config() {
        let config = AppConfig::production();
        assert!(config.environment.is_production());
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.cache.stats_ttl_seconds, 300);
    }

    #[test]
    fn test_env_or_falls_back_on_missing_variable() {
        let value: u32 = env_or("HW_TEST_SURELY_UNSET_VARIABLE", 42);
        assert_eq!(value, 42);
    }
}
