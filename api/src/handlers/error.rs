use std::collections::HashMap;

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use validator::{ValidationErrors, ValidationErrorsKind};

use hw_core::errors::{CatalogError, ConfigurationError, DomainError, ValidationError};
use hw_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Status and wire body for a domain error
fn map_domain_error(error: &DomainError) -> (StatusCode, ErrorResponse) {
    match error {
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone()),
        ),
        DomainError::Unauthorized => (
            StatusCode::FORBIDDEN,
            ErrorResponse::new(
                error_codes::FORBIDDEN,
                "You are not allowed to perform this action",
            ),
        ),
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred"),
        ),
        DomainError::ValidationErr(validation_error) => (
            StatusCode::BAD_REQUEST,
            map_validation_error(validation_error),
        ),
        DomainError::Catalog(catalog_error) => (StatusCode::NOT_FOUND, map_catalog_error(catalog_error)),
        DomainError::Configuration(configuration_error) => {
            map_configuration_error(configuration_error)
        }
    }
}

fn map_validation_error(error: &ValidationError) -> ErrorResponse {
    let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, error.to_string())
        .add_detail("field", error.field());
    match error {
        ValidationError::OutOfRange { min, max, .. } => {
            response.add_detail("min", min).add_detail("max", max)
        }
        ValidationError::InvalidLength { min, max, actual, .. } => response
            .add_detail("min", min)
            .add_detail("max", max)
            .add_detail("actual", actual),
        _ => response,
    }
}

fn map_catalog_error(error: &CatalogError) -> ErrorResponse {
    match error {
        CatalogError::ComponentNotFound { id } => {
            ErrorResponse::new(error_codes::COMPONENT_NOT_FOUND, "Component not found")
                .add_detail("id", id)
        }
        CatalogError::ConfigurationNotFound { id } => {
            ErrorResponse::new(error_codes::CONFIGURATION_NOT_FOUND, "Configuration not found")
                .add_detail("id", id)
        }
    }
}

fn map_configuration_error(error: &ConfigurationError) -> (StatusCode, ErrorResponse) {
    match error {
        ConfigurationError::InvalidTransition { from, action } => (
            StatusCode::CONFLICT,
            ErrorResponse::new(error_codes::INVALID_STATUS_TRANSITION, error.to_string())
                .add_detail("status", from)
                .add_detail("action", action),
        ),
        ConfigurationError::EmptyConfiguration => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorResponse::new(error_codes::EMPTY_CONFIGURATION, error.to_string()),
        ),
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, body) = map_domain_error(&error);
    if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
    } else {
        log::debug!("Request rejected: {}", error);
    }
    body.to_response(status)
}

/// Turn `validator` failures into a `VALIDATION_ERROR` listing the failed
/// rule codes per field
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();
    collect_validation_errors(&errors, "", &mut details);

    log::debug!("Request body failed validation: {:?}", details.keys());
    ErrorResponse::with_details(
        error_codes::VALIDATION_ERROR,
        "Request validation failed",
        details,
    )
    .to_response(StatusCode::BAD_REQUEST)
}

fn collect_validation_errors(
    errors: &ValidationErrors,
    prefix: &str,
    details: &mut HashMap<String, serde_json::Value>,
) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let codes: Vec<String> = field_errors.iter().map(|e| e.code.to_string()).collect();
                details.insert(path, serde_json::json!(codes));
            }
            ValidationErrorsKind::Struct(inner) => {
                collect_validation_errors(inner, &path, details);
            }
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_validation_errors(inner, &format!("{}[{}]", path, index), details);
                }
            }
        }
    }
}

fn bad_request(message: String) -> actix_web::Error {
    let response = ErrorResponse::new(error_codes::BAD_REQUEST, message.clone())
        .to_response(StatusCode::BAD_REQUEST);
    actix_web::error::InternalError::from_response(message, response).into()
}

/// Malformed JSON bodies answer with a `BAD_REQUEST` envelope
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Invalid JSON payload: {}", error);
    bad_request(format!("Invalid request body: {}", error))
}

/// Malformed query strings answer with a `BAD_REQUEST` envelope
pub fn query_error_handler(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    bad_request(format!("Invalid query string: {}", error))
}

/// Malformed path segments (e.g. a bad UUID) answer with a `BAD_REQUEST` envelope
pub fn path_error_handler(error: PathError, _req: &HttpRequest) -> actix_web::Error {
    bad_request(format!("Invalid path: {}", error))
}
