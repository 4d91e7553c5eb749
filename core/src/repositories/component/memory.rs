//! In-memory implementation of ComponentRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Component, ComponentCategory};
use crate::errors::DomainError;

use super::trait_::ComponentRepository;

/// Component catalog held in process memory
pub struct InMemoryComponentRepository {
    components: Arc<RwLock<HashMap<Uuid, Component>>>,
}

impl InMemoryComponentRepository {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            components: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a catalog pre-filled with `components`
    pub fn with_components(components: impl IntoIterator<Item = Component>) -> Self {
        let map = components
            .into_iter()
            .map(|component| (component.id, component))
            .collect();
        Self {
            components: Arc::new(RwLock::new(map)),
        }
    }
}

impl Default for InMemoryComponentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ComponentRepository for InMemoryComponentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Component>, DomainError> {
        let components = self.components.read().await;
        Ok(components.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Component>, DomainError> {
        let components = self.components.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| components.get(id).cloned())
            .collect())
    }

    async fn list(
        &self,
        category: Option<ComponentCategory>,
    ) -> Result<Vec<Component>, DomainError> {
        let components = self.components.read().await;
        let mut listed: Vec<Component> = components
            .values()
            .filter(|component| category.map_or(true, |wanted| component.category == wanted))
            .cloned()
            .collect();
        listed.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(listed)
    }

    async fn save(&self, component: Component) -> Result<Component, DomainError> {
        if component.name.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "Component name must not be empty".to_string(),
            });
        }

        let mut components = self.components.write().await;
        components.insert(component.id, component.clone());
        Ok(component)
    }
}
