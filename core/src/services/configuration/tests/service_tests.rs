//! Unit tests for the configuration workflow service

use rust_decimal_macros::dec;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{
    Component, ComponentCategory, ConfigurationItem, ConfigurationStatus,
};
use crate::domain::value_objects::{Caller, CallerRole};
use crate::errors::{CatalogError, ConfigurationError, DomainError, ValidationError};
use crate::repositories::{InMemoryComponentRepository, InMemoryConfigurationRepository};
use crate::services::configuration::{ConfigurationService, NewConfiguration};

type Service = ConfigurationService<InMemoryComponentRepository, InMemoryConfigurationRepository>;

struct Fixture {
    service: Service,
    cpu: Component,
    board: Component,
}

fn fixture() -> Fixture {
    let cpu = Component::new(ComponentCategory::Cpu, "Ryzen 5 7600", dec!(199.00))
        .with_spec("Socket", "AM5")
        .with_stock(10);
    let board = Component::new(ComponentCategory::Motherboard, "B650 Tomahawk", dec!(219.50))
        .with_spec("Socket", "AM5")
        .with_stock(4);
    let components = Arc::new(InMemoryComponentRepository::with_components(vec![
        cpu.clone(),
        board.clone(),
    ]));
    let configurations = Arc::new(InMemoryConfigurationRepository::new());
    Fixture {
        service: ConfigurationService::new(components, configurations),
        cpu,
        board,
    }
}

fn request(fx: &Fixture, name: &str) -> NewConfiguration {
    NewConfiguration {
        name: name.to_string(),
        description: Some("  Quiet 1440p build ".to_string()),
        items: vec![
            ConfigurationItem::new(fx.cpu.id, 1),
            ConfigurationItem::new(fx.board.id, 1),
        ],
        is_public: true,
    }
}

fn reviewer() -> Caller {
    Caller::staff(Uuid::new_v4())
}

#[tokio::test]
async fn test_create_prices_and_owns_draft() {
    let fx = fixture();
    let author = Caller::customer(Uuid::new_v4());

    let created = fx.service.create(&author, request(&fx, "  Budget AM5 ")).await.unwrap();

    assert_eq!(created.name, "Budget AM5");
    assert_eq!(created.description.as_deref(), Some("Quiet 1440p build"));
    assert_eq!(created.owner_id, author.user_id);
    assert_eq!(created.total_price, dec!(418.50));
    assert_eq!(created.status, ConfigurationStatus::Draft);
    assert!(created.is_public);
}

#[tokio::test]
async fn test_create_merges_repeated_items() {
    let fx = fixture();
    let author = Caller::customer(Uuid::new_v4());
    let mut req = request(&fx, "Twin CPUs");
    req.items.push(ConfigurationItem::new(fx.cpu.id, 1));

    let created = fx.service.create(&author, req).await.unwrap();

    assert_eq!(created.items.len(), 2);
    assert_eq!(created.items[0], ConfigurationItem::new(fx.cpu.id, 2));
    assert_eq!(created.total_price, dec!(617.50));
}

#[tokio::test]
async fn test_create_validation() {
    let fx = fixture();
    let author = Caller::customer(Uuid::new_v4());

    let blank = fx.service.create(&author, request(&fx, "   ")).await;
    assert!(matches!(
        blank,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { ref field })) if field == "name"
    ));

    let long = fx.service.create(&author, request(&fx, &"x".repeat(121))).await;
    assert!(matches!(
        long,
        Err(DomainError::ValidationErr(ValidationError::InvalidLength { actual: 121, .. }))
    ));

    let mut unknown = request(&fx, "Ghost parts");
    unknown.items = vec![ConfigurationItem::new(Uuid::new_v4(), 1)];
    let result = fx.service.create(&author, unknown).await;
    assert!(matches!(
        result,
        Err(DomainError::Catalog(CatalogError::ComponentNotFound { .. }))
    ));

    let anonymous = fx.service.create(&Caller::anonymous(), request(&fx, "Guest")).await;
    assert!(matches!(anonymous, Err(DomainError::Unauthorized)));
}

#[tokio::test]
async fn test_review_workflow_publishes_build() {
    let fx = fixture();
    let author = Caller::customer(Uuid::new_v4());
    let staff = reviewer();

    let created = fx.service.create(&author, request(&fx, "Listed")).await.unwrap();
    assert!(fx.service.list_public().await.unwrap().is_empty());

    let submitted = fx.service.submit(&author, created.id).await.unwrap();
    assert_eq!(submitted.status, ConfigurationStatus::PendingReview);

    let pending = fx.service.list_pending(&staff).await.unwrap();
    assert_eq!(pending.len(), 1);

    let approved = fx.service.approve(&staff, created.id).await.unwrap();
    assert_eq!(approved.status, ConfigurationStatus::Approved);
    assert_eq!(approved.reviewed_by, staff.user_id);

    let public = fx.service.list_public().await.unwrap();
    assert_eq!(public.len(), 1);
    assert!(fx.service.list_pending(&staff).await.unwrap().is_empty());

    // Listed builds are visible to anyone
    let seen = fx.service.get(&Caller::anonymous(), created.id).await.unwrap();
    assert_eq!(seen.id, created.id);
}

#[tokio::test]
async fn test_reject_and_revise() {
    let fx = fixture();
    let author = Caller::customer(Uuid::new_v4());
    let staff = reviewer();

    let created = fx.service.create(&author, request(&fx, "Needs work")).await.unwrap();
    fx.service.submit(&author, created.id).await.unwrap();

    let blank_note = fx.service.reject(&staff, created.id, "  ").await;
    assert!(matches!(blank_note, Err(DomainError::ValidationErr(_))));

    let rejected = fx
        .service
        .reject(&staff, created.id, "Add a power supply")
        .await
        .unwrap();
    assert_eq!(rejected.status, ConfigurationStatus::Rejected);
    assert_eq!(rejected.review_note.as_deref(), Some("Add a power supply"));

    let revised = fx
        .service
        .revise(&author, created.id, &[ConfigurationItem::new(fx.cpu.id, 1)])
        .await
        .unwrap();
    assert_eq!(revised.status, ConfigurationStatus::Draft);
    assert_eq!(revised.total_price, dec!(199.00));

    fx.service.submit(&author, created.id).await.unwrap();
}

#[tokio::test]
async fn test_staff_only_operations() {
    let fx = fixture();
    let author = Caller::customer(Uuid::new_v4());
    let created = fx.service.create(&author, request(&fx, "Mine")).await.unwrap();
    fx.service.submit(&author, created.id).await.unwrap();

    assert!(matches!(
        fx.service.approve(&author, created.id).await,
        Err(DomainError::Unauthorized)
    ));
    assert!(matches!(
        fx.service.reject(&author, created.id, "no").await,
        Err(DomainError::Unauthorized)
    ));
    assert!(matches!(
        fx.service.list_pending(&Caller::anonymous()).await,
        Err(DomainError::Unauthorized)
    ));

    // A staff role without a user id cannot be recorded as reviewer
    let nameless = Caller {
        user_id: None,
        role: CallerRole::Admin,
    };
    assert!(matches!(
        fx.service.approve(&nameless, created.id).await,
        Err(DomainError::Unauthorized)
    ));
}

#[tokio::test]
async fn test_invalid_transitions() {
    let fx = fixture();
    let author = Caller::customer(Uuid::new_v4());
    let staff = reviewer();
    let created = fx.service.create(&author, request(&fx, "Early")).await.unwrap();

    let result = fx.service.approve(&staff, created.id).await;
    assert!(matches!(
        result,
        Err(DomainError::Configuration(ConfigurationError::InvalidTransition {
            from: ConfigurationStatus::Draft,
            action: "approve",
        }))
    ));

    fx.service.submit(&author, created.id).await.unwrap();
    let again = fx.service.submit(&author, created.id).await;
    assert!(matches!(
        again,
        Err(DomainError::Configuration(ConfigurationError::InvalidTransition { .. }))
    ));
}

#[tokio::test]
async fn test_private_builds_hidden_from_others() {
    let fx = fixture();
    let author = Caller::customer(Uuid::new_v4());
    let stranger = Caller::customer(Uuid::new_v4());
    let created = fx.service.create(&author, request(&fx, "Private")).await.unwrap();

    assert!(fx.service.get(&author, created.id).await.is_ok());
    assert!(fx.service.get(&reviewer(), created.id).await.is_ok());
    assert!(matches!(
        fx.service.get(&stranger, created.id).await,
        Err(DomainError::Catalog(CatalogError::ConfigurationNotFound { .. }))
    ));
    assert!(matches!(
        fx.service.submit(&stranger, created.id).await,
        Err(DomainError::Catalog(CatalogError::ConfigurationNotFound { .. }))
    ));
    assert!(matches!(
        fx.service.get(&author, Uuid::new_v4()).await,
        Err(DomainError::Catalog(CatalogError::ConfigurationNotFound { .. }))
    ));
}
