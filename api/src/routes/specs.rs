use actix_web::{web, HttpRequest, HttpResponse};

use hw_core::services::specs::canonical_keys;
use hw_core::services::normalize_spec_key;

use crate::dto::specs::{NormalizeQuery, NormalizeResponse};
use crate::handlers::ok;

/// Handler for GET /api/v1/specs/normalize?key=
pub async fn normalize(req: HttpRequest, query: web::Query<NormalizeQuery>) -> HttpResponse {
    let NormalizeQuery { key } = query.into_inner();
    let canonical = normalize_spec_key(&key);
    ok(&req, NormalizeResponse { key, canonical })
}

/// Handler for GET /api/v1/specs/keys
pub async fn keys(req: HttpRequest) -> HttpResponse {
    ok(&req, canonical_keys())
}
