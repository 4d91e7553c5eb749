//! Back-office review queue. Every handler requires a staff caller.

use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use hw_core::repositories::{ComponentRepository, ConfigurationRepository};

use crate::dto::configuration::RejectConfigurationRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors, ok};
use crate::middleware::CallerContext;
use crate::state::AppState;

/// Handler for GET /api/v1/admin/configurations/pending
pub async fn list_pending<C, G>(
    req: HttpRequest,
    state: web::Data<AppState<C, G>>,
    caller: CallerContext,
) -> HttpResponse
where
    C: ComponentRepository + 'static,
    G: ConfigurationRepository + 'static,
{
    match state.configurations.list_pending(caller.caller()).await {
        Ok(pending) => ok(&req, pending),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for POST /api/v1/admin/configurations/{id}/approve
///
/// Approval can change the public listing, so the statistics cache is
/// dropped.
pub async fn approve<C, G>(
    req: HttpRequest,
    state: web::Data<AppState<C, G>>,
    caller: CallerContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    C: ComponentRepository + 'static,
    G: ConfigurationRepository + 'static,
{
    match state
        .configurations
        .approve(caller.caller(), path.into_inner())
        .await
    {
        Ok(configuration) => {
            state.stats.invalidate().await;
            ok(&req, configuration)
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for POST /api/v1/admin/configurations/{id}/reject
pub async fn reject<C, G>(
    req: HttpRequest,
    state: web::Data<AppState<C, G>>,
    caller: CallerContext,
    path: web::Path<Uuid>,
    request: web::Json<RejectConfigurationRequest>,
) -> HttpResponse
where
    C: ComponentRepository + 'static,
    G: ConfigurationRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .configurations
        .reject(caller.caller(), path.into_inner(), &request.note)
        .await
    {
        Ok(configuration) => {
            state.stats.invalidate().await;
            ok(&req, configuration)
        }
        Err(e) => handle_domain_error(e),
    }
}
