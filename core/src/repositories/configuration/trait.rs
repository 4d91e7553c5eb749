//! Configuration repository trait for saved PC builds.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Configuration, ConfigurationStatus};
use crate::errors::DomainError;

/// Repository trait for configuration persistence operations
#[async_trait]
pub trait ConfigurationRepository: Send + Sync {
    /// Find a configuration by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Configuration>, DomainError>;

    /// Insert or replace a configuration
    ///
    /// # Returns
    /// * `Ok(Configuration)` - The stored configuration
    async fn save(&self, configuration: Configuration) -> Result<Configuration, DomainError>;

    /// All configurations in `status`, oldest first
    async fn list_by_status(
        &self,
        status: ConfigurationStatus,
    ) -> Result<Vec<Configuration>, DomainError>;

    /// Approved configurations the author marked public, newest first
    async fn list_public(&self) -> Result<Vec<Configuration>, DomainError>;

    /// Number of configurations currently listed publicly
    async fn count_public(&self) -> Result<u64, DomainError> {
        Ok(self.list_public().await?.len() as u64)
    }
}
