//! Caller extraction.
//!
//! Authentication happens upstream; the gateway forwards the caller's
//! identity in `X-User-Id` and `X-User-Role`. Missing headers mean an
//! anonymous customer. Malformed headers are rejected with `401`.

use actix_web::{
    dev::Payload, error::InternalError, http::StatusCode, Error, FromRequest, HttpRequest,
};
use std::future::{ready, Ready};
use uuid::Uuid;

use hw_core::domain::value_objects::{Caller, CallerRole};
use hw_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Caller of the current request
#[derive(Debug, Clone, Copy)]
pub struct CallerContext(pub Caller);

impl CallerContext {
    pub fn caller(&self) -> &Caller {
        &self.0
    }
}

fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Result<Option<&'a str>, String> {
    match req.headers().get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(|v| Some(v.trim()).filter(|v| !v.is_empty()))
            .map_err(|_| format!("Header {} is not valid text", name)),
    }
}

/// Parse the identity headers of a request
pub fn extract_caller(req: &HttpRequest) -> Result<Caller, String> {
    let user_id = header_value(req, USER_ID_HEADER)?
        .map(|raw| Uuid::parse_str(raw).map_err(|_| format!("Invalid user id: {}", raw)))
        .transpose()?;
    let role = header_value(req, USER_ROLE_HEADER)?
        .map(str::parse::<CallerRole>)
        .transpose()?
        .unwrap_or_default();

    Ok(Caller { user_id, role })
}

impl FromRequest for CallerContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = extract_caller(req).map(CallerContext).map_err(|message| {
            log::warn!("Rejected caller headers on {}: {}", req.path(), message);
            let response = ErrorResponse::new(error_codes::UNAUTHORIZED, message.clone())
                .to_response(StatusCode::UNAUTHORIZED);
            InternalError::from_response(message, response).into()
        });
        ready(result)
    }
}
