//! Shared application state handed to every handler

use std::sync::Arc;

use hw_core::repositories::{ComponentRepository, ConfigurationRepository};
use hw_core::services::{
    ConfigurationService, ConfiguratorService, ShippingCalculator, ShippingRateTable,
    StatsService,
};
use hw_shared::config::{AppConfig, CatalogConfig};

/// Application state that holds shared services
pub struct AppState<C, G>
where
    C: ComponentRepository,
    G: ConfigurationRepository,
{
    pub components: Arc<C>,
    pub configurator: ConfiguratorService<C>,
    pub configurations: ConfigurationService<C, G>,
    pub stats: StatsService<C, G>,
    pub shipping: ShippingCalculator,
    pub catalog: CatalogConfig,
}

impl<C, G> AppState<C, G>
where
    C: ComponentRepository,
    G: ConfigurationRepository,
{
    pub fn new(components: Arc<C>, configurations: Arc<G>, config: &AppConfig) -> Self {
        Self {
            configurator: ConfiguratorService::new(components.clone()),
            configurations: ConfigurationService::new(components.clone(), configurations.clone()),
            stats: StatsService::new(
                components.clone(),
                configurations,
                &config.cache,
                &config.catalog,
            ),
            shipping: ShippingCalculator::new(ShippingRateTable::from(&config.shipping)),
            catalog: config.catalog.clone(),
            components,
        }
    }

    /// Replace the statistics service, e.g. to inject a test clock
    pub fn with_stats(mut self, stats: StatsService<C, G>) -> Self {
        self.stats = stats;
        self
    }
}
