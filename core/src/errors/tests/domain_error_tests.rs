//! Unit tests for domain error types

use uuid::Uuid;

use crate::domain::entities::configuration::ConfigurationStatus;
use crate::errors::{CatalogError, ConfigurationError, DomainError, ValidationError};

#[test]
fn test_catalog_error_message_contains_id() {
    let id = Uuid::new_v4();
    let error = CatalogError::ComponentNotFound { id };
    assert!(error.to_string().contains(&id.to_string()));
}

#[test]
fn test_invalid_transition_message() {
    let error = ConfigurationError::InvalidTransition {
        from: ConfigurationStatus::Approved,
        action: "submit",
    };
    assert_eq!(
        error.to_string(),
        "Cannot submit a configuration in status approved"
    );
}

#[test]
fn test_validation_error_field() {
    let error = ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: "1".to_string(),
        max: "16".to_string(),
    };
    assert_eq!(error.field(), "quantity");
    assert!(error.to_string().contains("min: 1"));

    let error = ValidationError::InvalidLength {
        field: "name".to_string(),
        min: 1,
        max: 120,
        actual: 0,
    };
    assert_eq!(error.field(), "name");
    assert!(error.to_string().contains("actual: 0"));

    let error = ValidationError::RequiredField {
        field: "items".to_string(),
    };
    assert_eq!(error.field(), "items");
}

#[test]
fn test_domain_error_bridges_are_transparent() {
    let error: DomainError = ConfigurationError::EmptyConfiguration.into();
    assert!(matches!(
        error,
        DomainError::Configuration(ConfigurationError::EmptyConfiguration)
    ));
    assert_eq!(error.to_string(), "Configuration has no components");

    let error: DomainError = ValidationError::RequiredField {
        field: "items".to_string(),
    }
    .into();
    assert_eq!(error.to_string(), "Required field: items");
}
