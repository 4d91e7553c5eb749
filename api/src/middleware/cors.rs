//! CORS middleware configuration for cross-origin requests.
//!
//! The storefront frontend and back-office tools call the API from the
//! browser. Origins come from `CorsConfig`; a `*` entry allows any origin.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use hw_shared::config::CorsConfig;

use super::caller::{USER_ID_HEADER, USER_ROLE_HEADER};
use super::request_id::REQUEST_ID_HEADER;

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static(USER_ID_HEADER),
            header::HeaderName::from_static(USER_ROLE_HEADER),
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers(vec![header::HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        log::info!("Configuring CORS to allow any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()) {
            if !origin.is_empty() {
                log::info!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    // actix-cors rejects credentials together with a wildcard origin
    if config.allow_credentials && !config.allows_any_origin() {
        cors = cors.supports_credentials();
    }

    cors
}
