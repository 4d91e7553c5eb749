use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

use hw_shared::types::ApiResponse;

use crate::middleware::RequestIdExt;

fn envelope<T: Serialize>(req: &HttpRequest, data: T) -> ApiResponse<T> {
    let response = ApiResponse::success(data);
    match req.request_id() {
        Some(request_id) => response.with_request_id(request_id),
        None => response,
    }
}

/// `200 OK` with the data wrapped in an `ApiResponse`
pub fn ok<T: Serialize>(req: &HttpRequest, data: T) -> HttpResponse {
    HttpResponse::Ok().json(envelope(req, data))
}

/// `201 Created` with the data wrapped in an `ApiResponse`
pub fn created<T: Serialize>(req: &HttpRequest, data: T) -> HttpResponse {
    HttpResponse::Created().json(envelope(req, data))
}
