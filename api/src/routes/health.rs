use actix_web::{web, HttpResponse};

use hw_core::repositories::{ComponentRepository, ConfigurationRepository};
use hw_shared::types::{HealthResponse, HealthStatus};

use crate::state::AppState;

/// Handler for GET /health
///
/// Reports `degraded` when the catalog cannot be read.
pub async fn health_check<C, G>(state: web::Data<AppState<C, G>>) -> HttpResponse
where
    C: ComponentRepository + 'static,
    G: ConfigurationRepository + 'static,
{
    let catalog = match state.components.list(None).await {
        Ok(_) => HealthStatus::Healthy,
        Err(e) => {
            log::error!("Health check could not read the catalog: {}", e);
            HealthStatus::Unhealthy
        }
    };

    HttpResponse::Ok().json(
        HealthResponse::healthy("hardwarehub-api", env!("CARGO_PKG_VERSION"))
            .with_check("catalog", catalog),
    )
}

/// Handler for GET /api/v1
pub async fn api_index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "HardwareHub API v1",
        "endpoints": {
            "health": "GET /health",
            "components": {
                "list": "GET /api/v1/components?category=&page=&per_page=",
                "detail": "GET /api/v1/components/{id}"
            },
            "configurator": {
                "quote": "POST /api/v1/configurator/quote",
                "psu": "GET /api/v1/configurator/psu?watts="
            },
            "shipping": {
                "rates": "POST /api/v1/shipping/rates"
            },
            "specs": {
                "normalize": "GET /api/v1/specs/normalize?key=",
                "keys": "GET /api/v1/specs/keys"
            },
            "auth": {
                "password_strength": "POST /api/v1/auth/password-strength"
            },
            "configurations": {
                "create": "POST /api/v1/configurations",
                "public": "GET /api/v1/configurations/public",
                "detail": "GET /api/v1/configurations/{id}",
                "revise": "PUT /api/v1/configurations/{id}",
                "submit": "POST /api/v1/configurations/{id}/submit"
            },
            "admin": {
                "pending": "GET /api/v1/admin/configurations/pending",
                "approve": "POST /api/v1/admin/configurations/{id}/approve",
                "reject": "POST /api/v1/admin/configurations/{id}/reject"
            },
            "stats": "GET /api/v1/stats"
        }
    }))
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(hw_shared::errors::ErrorResponse::new(
        hw_shared::errors::error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
