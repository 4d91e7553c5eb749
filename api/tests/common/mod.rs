//! Shared fixtures for the HTTP tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use hw_api::{seed, AppState};
use hw_core::{
    Caller, ComponentRepository, InMemoryComponentRepository, InMemoryConfigurationRepository,
};
use hw_shared::config::AppConfig;

pub type TestState = AppState<InMemoryComponentRepository, InMemoryConfigurationRepository>;

pub const USER_ID_HEADER: &str = "X-User-Id";
pub const USER_ROLE_HEADER: &str = "X-User-Role";

pub fn test_config() -> AppConfig {
    AppConfig::development()
}

/// State over the sample catalog and an empty configuration store
pub fn test_state() -> web::Data<TestState> {
    web::Data::new(AppState::new(
        Arc::new(InMemoryComponentRepository::with_components(
            seed::sample_catalog(),
        )),
        Arc::new(InMemoryConfigurationRepository::new()),
        &test_config(),
    ))
}

/// Id of the sample catalog component with the given name
pub async fn component_id(state: &web::Data<TestState>, name: &str) -> Uuid {
    state
        .components
        .list(None)
        .await
        .unwrap()
        .into_iter()
        .find(|component| component.name == name)
        .unwrap_or_else(|| panic!("no component named {}", name))
        .id
}

/// A compatible AM5 build with a 650W supply
pub async fn am5_build(state: &web::Data<TestState>) -> serde_json::Value {
    serde_json::json!([
        { "component_id": component_id(state, "AMD Ryzen 5 7600").await, "quantity": 1 },
        { "component_id": component_id(state, "MSI MAG B650 Tomahawk").await, "quantity": 1 },
        { "component_id": component_id(state, "Kingston Fury Beast 32GB DDR5-6000").await, "quantity": 1 },
        { "component_id": component_id(state, "NVIDIA GeForce RTX 4070 Super").await, "quantity": 1 },
        { "component_id": component_id(state, "Corsair RM650e").await, "quantity": 1 }
    ])
}

/// Identity headers for a caller
pub fn caller_headers(caller: &Caller) -> Vec<(&'static str, String)> {
    let mut headers = Vec::new();
    if let Some(user_id) = caller.user_id {
        headers.push((USER_ID_HEADER, user_id.to_string()));
    }
    headers.push((
        USER_ROLE_HEADER,
        if caller.is_staff() { "staff" } else { "customer" }.to_string(),
    ));
    headers
}
