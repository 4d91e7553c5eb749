//! Unit tests for the in-memory component repository

use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::domain::entities::{Component, ComponentCategory};
use crate::errors::DomainError;
use crate::repositories::component::{ComponentRepository, InMemoryComponentRepository};

fn catalog() -> (InMemoryComponentRepository, Vec<Component>) {
    let components = vec![
        Component::new(ComponentCategory::Gpu, "Radeon RX 7800 XT", dec!(549.00)),
        Component::new(ComponentCategory::Cpu, "Ryzen 7 7700X", dec!(329.00)),
        Component::new(ComponentCategory::Cpu, "Core i5-14600K", dec!(299.00)),
    ];
    (
        InMemoryComponentRepository::with_components(components.clone()),
        components,
    )
}

#[tokio::test]
async fn test_find_by_id() {
    let (repo, components) = catalog();

    let found = repo.find_by_id(components[0].id).await.unwrap();
    assert_eq!(found.unwrap().name, "Radeon RX 7800 XT");

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_ids_skips_unknown() {
    let (repo, components) = catalog();

    let found = repo
        .find_by_ids(&[components[1].id, Uuid::new_v4(), components[2].id])
        .await
        .unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, components[1].id);
    assert_eq!(found[1].id, components[2].id);
}

#[tokio::test]
async fn test_list_orders_by_category_then_name() {
    let (repo, _) = catalog();

    let all = repo.list(None).await.unwrap();
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Core i5-14600K", "Ryzen 7 7700X", "Radeon RX 7800 XT"]);

    let gpus = repo.list(Some(ComponentCategory::Gpu)).await.unwrap();
    assert_eq!(gpus.len(), 1);

    let cases = repo.list(Some(ComponentCategory::Case)).await.unwrap();
    assert!(cases.is_empty());
}

#[tokio::test]
async fn test_save_replaces_existing() {
    let repo = InMemoryComponentRepository::new();
    let component = Component::new(ComponentCategory::Storage, "990 PRO 2TB", dec!(179.99));
    repo.save(component.clone()).await.unwrap();

    let restocked = component.clone().with_stock(12);
    repo.save(restocked).await.unwrap();

    let found = repo.find_by_id(component.id).await.unwrap().unwrap();
    assert_eq!(found.stock, 12);
    assert_eq!(repo.list(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_save_rejects_blank_name() {
    let repo = InMemoryComponentRepository::new();
    let result = repo
        .save(Component::new(ComponentCategory::Case, "  ", dec!(89.00)))
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}
