use actix_web::{web, HttpRequest, HttpResponse};

use hw_core::repositories::{ComponentRepository, ConfigurationRepository};

use crate::handlers::{handle_domain_error, ok};
use crate::state::AppState;

/// Handler for GET /api/v1/stats
///
/// Served from the statistics cache; a stale or missing snapshot is
/// recomputed first.
pub async fn stats<C, G>(req: HttpRequest, state: web::Data<AppState<C, G>>) -> HttpResponse
where
    C: ComponentRepository + 'static,
    G: ConfigurationRepository + 'static,
{
    match state.stats.stats().await {
        Ok(stats) => ok(&req, stats),
        Err(e) => handle_domain_error(e),
    }
}
