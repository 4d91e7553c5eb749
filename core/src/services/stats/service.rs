//! Catalog statistics service

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use hw_shared::config::{CacheConfig, CatalogConfig};

use crate::domain::entities::ComponentCategory;
use crate::domain::value_objects::CatalogStats;
use crate::errors::DomainResult;
use crate::repositories::{ComponentRepository, ConfigurationRepository};

use super::cache::{Clock, SystemClock, TtlCache};

/// Computes storefront statistics, recomputing at most once per TTL
pub struct StatsService<C, G>
where
    C: ComponentRepository,
    G: ConfigurationRepository,
{
    components: Arc<C>,
    configurations: Arc<G>,
    low_stock_threshold: u32,
    clock: Arc<dyn Clock>,
    cache: TtlCache<CatalogStats>,
}

impl<C, G> StatsService<C, G>
where
    C: ComponentRepository,
    G: ConfigurationRepository,
{
    pub fn new(
        components: Arc<C>,
        configurations: Arc<G>,
        cache_config: &CacheConfig,
        catalog_config: &CatalogConfig,
    ) -> Self {
        Self::with_clock(
            components,
            configurations,
            cache_config,
            catalog_config,
            Arc::new(SystemClock),
        )
    }

    pub fn with_clock(
        components: Arc<C>,
        configurations: Arc<G>,
        cache_config: &CacheConfig,
        catalog_config: &CatalogConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            components,
            configurations,
            low_stock_threshold: catalog_config.low_stock_threshold,
            cache: TtlCache::new(cache_config.stats_ttl(), clock.clone()),
            clock,
        }
    }

    /// Current statistics, from cache while fresh
    pub async fn stats(&self) -> DomainResult<CatalogStats> {
        self.cache.get_or_try_insert_with(|| self.compute()).await
    }

    /// Force the next call to `stats` to recompute
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
        debug!("Catalog statistics cache invalidated");
    }

    async fn compute(&self) -> DomainResult<CatalogStats> {
        let components = self.components.list(None).await?;
        let public_configuration_count = self.configurations.count_public().await?;

        let mut category_counts: BTreeMap<ComponentCategory, u64> = BTreeMap::new();
        let mut out_of_stock_count = 0;
        let mut low_stock_count = 0;
        for component in &components {
            *category_counts.entry(component.category).or_default() += 1;
            if !component.is_in_stock() {
                out_of_stock_count += 1;
            } else if component.is_low_stock(self.low_stock_threshold) {
                low_stock_count += 1;
            }
        }

        let stats = CatalogStats {
            component_count: components.len() as u64,
            out_of_stock_count,
            low_stock_count,
            category_counts,
            public_configuration_count,
            generated_at: self.clock.now(),
        };
        info!(
            components = stats.component_count,
            out_of_stock = stats.out_of_stock_count,
            low_stock = stats.low_stock_count,
            "Recomputed catalog statistics"
        );
        Ok(stats)
    }
}
