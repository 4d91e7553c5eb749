//! Build quotes and power supply sizing

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use hw_core::repositories::{ComponentRepository, ConfigurationRepository};
use hw_core::services::{recommended_psu_wattage, PsuTier};

use crate::dto::configurator::{to_items, PsuQuery, PsuResponse, QuoteRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors, ok};
use crate::state::AppState;

/// Handler for POST /api/v1/configurator/quote
///
/// Prices a selection and reports compatibility issues. An incompatible
/// build still gets a quote; the issues are part of the response.
pub async fn quote<C, G>(
    req: HttpRequest,
    state: web::Data<AppState<C, G>>,
    request: web::Json<QuoteRequest>,
) -> HttpResponse
where
    C: ComponentRepository + 'static,
    G: ConfigurationRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.configurator.quote(&to_items(&request.items)).await {
        Ok(quote) => ok(&req, quote),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/v1/configurator/psu?watts=
pub async fn psu(req: HttpRequest, query: web::Query<PsuQuery>) -> HttpResponse {
    let watts = query.watts;
    ok(
        &req,
        PsuResponse {
            watts,
            recommended: recommended_psu_wattage(watts).to_string(),
            rated_watts: PsuTier::for_load(watts).rated_watts(),
        },
    )
}
