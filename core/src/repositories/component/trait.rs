//! Component repository trait defining the interface for catalog persistence.
//!
//! The catalog itself is maintained by staff tooling outside this service;
//! the storefront only reads it, apart from `save` used for seeding.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Component, ComponentCategory};
use crate::errors::DomainError;

/// Repository trait for catalog components
///
/// # Example
/// ```no_run
/// # use hw_core::repositories::ComponentRepository;
/// # use hw_core::domain::entities::ComponentCategory;
/// # async fn example(repo: &impl ComponentRepository) -> Result<(), Box<dyn std::error::Error>> {
/// let cpus = repo.list(Some(ComponentCategory::Cpu)).await?;
/// println!("{} processors in the catalog", cpus.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ComponentRepository: Send + Sync {
    /// Find a component by its identifier
    ///
    /// # Returns
    /// * `Ok(Some(Component))` - Component found
    /// * `Ok(None)` - No component with the given id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Component>, DomainError>;

    /// Find several components at once; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Component>, DomainError>;

    /// List components ordered by category then name, optionally filtered
    async fn list(&self, category: Option<ComponentCategory>)
        -> Result<Vec<Component>, DomainError>;

    /// Insert or replace a component
    async fn save(&self, component: Component) -> Result<Component, DomainError>;
}
