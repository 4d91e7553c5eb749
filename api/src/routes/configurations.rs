//! Customer-facing configuration endpoints

use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use hw_core::repositories::{ComponentRepository, ConfigurationRepository};
use hw_shared::types::{PaginatedResponse, Pagination};

use crate::dto::configuration::{
    CreateConfigurationRequest, PageQuery, ReviseConfigurationRequest,
};
use crate::dto::configurator::to_items;
use crate::handlers::{created, handle_domain_error, handle_validation_errors, ok};
use crate::middleware::CallerContext;
use crate::state::AppState;

/// Handler for POST /api/v1/configurations
///
/// Creates a draft owned by the caller. Anonymous callers get `403`.
pub async fn create<C, G>(
    req: HttpRequest,
    state: web::Data<AppState<C, G>>,
    caller: CallerContext,
    request: web::Json<CreateConfigurationRequest>,
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
        .create(caller.caller(), request.into_inner().into())
        .await
    {
        Ok(configuration) => created(&req, configuration),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/configurations/public
pub async fn list_public<C, G>(
    req: HttpRequest,
    state: web::Data<AppState<C, G>>,
    query: web::Query<PageQuery>,
) -> HttpResponse
where
    C: ComponentRepository + 'static,
    G: ConfigurationRepository + 'static,
{
    let pagination = Pagination::new(
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(state.catalog.default_page_size),
    );

    match state.configurations.list_public().await {
        Ok(configurations) => ok(&req, PaginatedResponse::from_items(configurations, pagination)),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/configurations/{id}
pub async fn get<C, G>(
    req: HttpRequest,
    state: web::Data<AppState<C, G>>,
    caller: CallerContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    C: ComponentRepository + 'static,
    G: ConfigurationRepository + 'static,
{
    match state.configurations.get(caller.caller(), path.into_inner()).await {
        Ok(configuration) => ok(&req, configuration),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for PUT /api/v1/configurations/{id}
///
/// Replaces the components of a draft or rejected build and reprices it.
pub async fn revise<C, G>(
    req: HttpRequest,
    state: web::Data<AppState<C, G>>,
    caller: CallerContext,
    path: web::Path<Uuid>,
    request: web::Json<ReviseConfigurationRequest>,
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
        .revise(caller.caller(), path.into_inner(), &to_items(&request.items))
        .await
    {
        Ok(configuration) => ok(&req, configuration),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for POST /api/v1/configurations/{id}/submit
pub async fn submit<C, G>(
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
        .submit(caller.caller(), path.into_inner())
        .await
    {
        Ok(configuration) => ok(&req, configuration),
        Err(e) => handle_domain_error(e),
    }
}
