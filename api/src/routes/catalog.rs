//! Catalog browsing

use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use hw_core::domain::entities::ComponentCategory;
use hw_core::errors::CatalogError;
use hw_core::repositories::{ComponentRepository, ConfigurationRepository};
use hw_shared::errors::error_codes;
use hw_shared::types::{PaginatedResponse, Pagination};

use crate::dto::catalog::{ComponentListQuery, ComponentResponse};
use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::{handle_domain_error, ok};
use crate::state::AppState;

/// Handler for GET /api/v1/components
///
/// Lists the catalog ordered by category then name, optionally filtered by
/// `category`, one page at a time.
pub async fn list_components<C, G>(
    req: HttpRequest,
    state: web::Data<AppState<C, G>>,
    query: web::Query<ComponentListQuery>,
) -> HttpResponse
where
    C: ComponentRepository + 'static,
    G: ConfigurationRepository + 'static,
{
    let query = query.into_inner();

    let category = match query.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(raw) => match raw.parse::<ComponentCategory>() {
            Ok(category) => Some(category),
            Err(message) => {
                return ErrorResponse::new(error_codes::VALIDATION_ERROR, message)
                    .add_detail("field", "category")
                    .add_detail("allowed", ComponentCategory::ALL)
                    .to_response(actix_web::http::StatusCode::BAD_REQUEST);
            }
        },
        None => None,
    };

    let pagination = Pagination::new(
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(state.catalog.default_page_size),
    );

    match state.components.list(category).await {
        Ok(components) => {
            let threshold = state.catalog.low_stock_threshold;
            let page = PaginatedResponse::from_items(components, pagination)
                .map(|component| ComponentResponse::from_component(component, threshold));
            ok(&req, page)
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/components/{id}
pub async fn get_component<C, G>(
    req: HttpRequest,
    state: web::Data<AppState<C, G>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    C: ComponentRepository + 'static,
    G: ConfigurationRepository + 'static,
{
    let id = path.into_inner();
    match state.components.find_by_id(id).await {
        Ok(Some(component)) => ok(
            &req,
            ComponentResponse::from_component(component, state.catalog.low_stock_threshold),
        ),
        Ok(None) => handle_domain_error(CatalogError::ComponentNotFound { id }.into()),
        Err(e) => handle_domain_error(e),
    }
}
