//! Configuration workflow service

use std::sync::Arc;
use uuid::Uuid;

use tracing::{info, warn};

use hw_shared::utils::validators;

use crate::domain::entities::{
    Configuration, ConfigurationItem, ConfigurationStatus, MAX_NAME_LENGTH,
};
use crate::domain::value_objects::Caller;
use crate::errors::{CatalogError, DomainError, DomainResult, ValidationError};
use crate::repositories::{ComponentRepository, ConfigurationRepository};
use crate::services::configurator::ConfiguratorService;

/// Maximum length of a reviewer note
const MAX_REVIEW_NOTE_LENGTH: usize = 1000;

/// Input for creating a configuration
#[derive(Debug, Clone, Default)]
pub struct NewConfiguration {
    pub name: String,
    pub description: Option<String>,
    pub items: Vec<ConfigurationItem>,
    pub is_public: bool,
}

/// Service for saved builds and their review workflow
pub struct ConfigurationService<C, G>
where
    C: ComponentRepository,
    G: ConfigurationRepository,
{
    /// Saved builds
    configurations: Arc<G>,
    /// Prices builds against the catalog
    configurator: ConfiguratorService<C>,
}

impl<C, G> ConfigurationService<C, G>
where
    C: ComponentRepository,
    G: ConfigurationRepository,
{
    pub fn new(components: Arc<C>, configurations: Arc<G>) -> Self {
        Self {
            configurations,
            configurator: ConfiguratorService::new(components),
        }
    }

    /// Create a draft owned by the caller, priced from the current catalog.
    ///
    /// Repeated components are merged into one item.
    pub async fn create(
        &self,
        caller: &Caller,
        request: NewConfiguration,
    ) -> DomainResult<Configuration> {
        let owner_id = caller.user_id.ok_or(DomainError::Unauthorized)?;
        let name = validate_name(&request.name)?;

        let quote = self.configurator.quote(&request.items).await?;
        let items = quote
            .lines
            .iter()
            .map(|line| ConfigurationItem::new(line.component_id, line.quantity))
            .collect();

        let mut configuration = Configuration::new(name, Some(owner_id), items, quote.total_price);
        if let Some(description) = request
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
        {
            configuration = configuration.with_description(description);
        }
        if request.is_public {
            configuration = configuration.public();
        }

        let saved = self.configurations.save(configuration).await?;
        info!(
            configuration_id = %saved.id,
            owner_id = %owner_id,
            total = %saved.total_price,
            "Configuration created"
        );
        Ok(saved)
    }

    /// Fetch a configuration visible to the caller.
    ///
    /// Listed builds are visible to everyone; others only to their owner
    /// and to staff. Hidden builds are reported as not found.
    pub async fn get(&self, caller: &Caller, id: Uuid) -> DomainResult<Configuration> {
        let configuration = self.load(id).await?;
        if configuration.is_listed() || can_manage(caller, &configuration) {
            Ok(configuration)
        } else {
            Err(CatalogError::ConfigurationNotFound { id }.into())
        }
    }

    /// Approved builds their authors chose to publish, newest first
    pub async fn list_public(&self) -> DomainResult<Vec<Configuration>> {
        self.configurations.list_public().await
    }

    /// Replace the components of a draft or rejected build; a rejected
    /// build returns to draft
    pub async fn revise(
        &self,
        caller: &Caller,
        id: Uuid,
        items: &[ConfigurationItem],
    ) -> DomainResult<Configuration> {
        let mut configuration = self.load_managed(caller, id).await?;

        let quote = self.configurator.quote(items).await?;
        let items = quote
            .lines
            .iter()
            .map(|line| ConfigurationItem::new(line.component_id, line.quantity))
            .collect();
        configuration.revise(items, quote.total_price)?;

        let saved = self.configurations.save(configuration).await?;
        info!(configuration_id = %id, total = %saved.total_price, "Configuration revised");
        Ok(saved)
    }

    /// Send a draft to the review queue
    pub async fn submit(&self, caller: &Caller, id: Uuid) -> DomainResult<Configuration> {
        let mut configuration = self.load_managed(caller, id).await?;
        configuration.submit()?;

        let saved = self.configurations.save(configuration).await?;
        info!(configuration_id = %id, "Configuration submitted for review");
        Ok(saved)
    }

    /// Builds waiting for review, oldest first. Staff only.
    pub async fn list_pending(&self, caller: &Caller) -> DomainResult<Vec<Configuration>> {
        require_staff(caller, "list pending configurations")?;
        self.configurations
            .list_by_status(ConfigurationStatus::PendingReview)
            .await
    }

    /// Approve a build waiting for review. Staff only.
    pub async fn approve(&self, caller: &Caller, id: Uuid) -> DomainResult<Configuration> {
        let reviewer = require_staff(caller, "approve a configuration")?;
        let mut configuration = self.load(id).await?;
        configuration.approve(reviewer)?;

        let saved = self.configurations.save(configuration).await?;
        info!(configuration_id = %id, reviewer = %reviewer, "Configuration approved");
        Ok(saved)
    }

    /// Reject a build waiting for review with a note for the author. Staff only.
    pub async fn reject(
        &self,
        caller: &Caller,
        id: Uuid,
        note: &str,
    ) -> DomainResult<Configuration> {
        let reviewer = require_staff(caller, "reject a configuration")?;
        let note = note.trim();
        if !validators::not_empty(note) {
            return Err(ValidationError::RequiredField {
                field: "note".to_string(),
            }
            .into());
        }
        if !validators::length_between(note, 1, MAX_REVIEW_NOTE_LENGTH) {
            return Err(ValidationError::InvalidLength {
                field: "note".to_string(),
                min: 1,
                max: MAX_REVIEW_NOTE_LENGTH,
                actual: note.chars().count(),
            }
            .into());
        }

        let mut configuration = self.load(id).await?;
        configuration.reject(reviewer, note)?;

        let saved = self.configurations.save(configuration).await?;
        info!(configuration_id = %id, reviewer = %reviewer, "Configuration rejected");
        Ok(saved)
    }

    async fn load(&self, id: Uuid) -> DomainResult<Configuration> {
        self.configurations
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::ConfigurationNotFound { id }.into())
    }

    async fn load_managed(&self, caller: &Caller, id: Uuid) -> DomainResult<Configuration> {
        let configuration = self.load(id).await?;
        if can_manage(caller, &configuration) {
            return Ok(configuration);
        }

        warn!(configuration_id = %id, user_id = ?caller.user_id, "Caller does not own configuration");
        if configuration.is_listed() {
            Err(DomainError::Unauthorized)
        } else {
            Err(CatalogError::ConfigurationNotFound { id }.into())
        }
    }
}

fn can_manage(caller: &Caller, configuration: &Configuration) -> bool {
    caller.is_staff()
        || (caller.user_id.is_some() && caller.user_id == configuration.owner_id)
}

fn require_staff(caller: &Caller, action: &str) -> DomainResult<Uuid> {
    match caller.user_id {
        Some(user_id) if caller.is_staff() => Ok(user_id),
        _ => {
            warn!(user_id = ?caller.user_id, role = ?caller.role, action, "Staff role required");
            Err(DomainError::Unauthorized)
        }
    }
}

fn validate_name(name: &str) -> DomainResult<&str> {
    let name = name.trim();
    if !validators::not_empty(name) {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        }
        .into());
    }
    if !validators::length_between(name, 1, MAX_NAME_LENGTH) {
        return Err(ValidationError::InvalidLength {
            field: "name".to_string(),
            min: 1,
            max: MAX_NAME_LENGTH,
            actual: name.chars().count(),
        }
        .into());
    }
    Ok(name)
}
