//! In-memory implementation of ConfigurationRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Configuration, ConfigurationStatus};
use crate::errors::DomainError;

use super::trait_::ConfigurationRepository;

/// Saved builds held in process memory
pub struct InMemoryConfigurationRepository {
    configurations: Arc<RwLock<HashMap<Uuid, Configuration>>>,
}

impl InMemoryConfigurationRepository {
    pub fn new() -> Self {
        Self {
            configurations: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryConfigurationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigurationRepository for InMemoryConfigurationRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Configuration>, DomainError> {
        let configurations = self.configurations.read().await;
        Ok(configurations.get(&id).cloned())
    }

    async fn save(&self, configuration: Configuration) -> Result<Configuration, DomainError> {
        let mut configurations = self.configurations.write().await;
        configurations.insert(configuration.id, configuration.clone());
        Ok(configuration)
    }

    async fn list_by_status(
        &self,
        status: ConfigurationStatus,
    ) -> Result<Vec<Configuration>, DomainError> {
        let configurations = self.configurations.read().await;
        let mut listed: Vec<Configuration> = configurations
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect();
        listed.sort_by(|a, b| a.updated_at.cmp(&b.updated_at).then_with(|| a.id.cmp(&b.id)));
        Ok(listed)
    }

    async fn list_public(&self) -> Result<Vec<Configuration>, DomainError> {
        let configurations = self.configurations.read().await;
        let mut listed: Vec<Configuration> = configurations
            .values()
            .filter(|c| c.is_listed())
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
        Ok(listed)
    }

    async fn count_public(&self) -> Result<u64, DomainError> {
        let configurations = self.configurations.read().await;
        Ok(configurations.values().filter(|c| c.is_listed()).count() as u64)
    }
}
