//! Security middleware for enforcing HTTPS and response hardening headers.
//!
//! - HTTPS enforcement in production (directly or via a trusted proxy)
//! - Origin header sanity check
//! - Security headers (HSTS, CSP, frame and sniffing protection)

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{
        header::{self, HeaderValue},
        StatusCode,
    },
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    env,
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use hw_shared::config::Environment;
use hw_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Security middleware factory
#[derive(Debug, Clone)]
pub struct SecurityMiddleware {
    /// Whether to reject plain HTTP requests
    enforce_https: bool,
    /// Whether to add security headers
    add_security_headers: bool,
    /// Peers allowed to vouch for HTTPS via `X-Forwarded-Proto`
    trusted_proxies: Vec<String>,
}

impl SecurityMiddleware {
    /// Configuration for the given environment; `TRUSTED_PROXIES` extends
    /// the proxy list
    pub fn for_environment(environment: Environment) -> Self {
        let mut middleware = if environment.is_production() {
            Self::production()
        } else {
            Self::development()
        };

        middleware.trusted_proxies.extend(
            env::var("TRUSTED_PROXIES")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        );

        log::info!(
            "Security middleware configured: enforce_https={}, add_headers={}, trusted_proxies={:?}",
            middleware.enforce_https,
            middleware.add_security_headers,
            middleware.trusted_proxies
        );
        middleware
    }

    /// No HTTPS enforcement, no extra headers
    pub fn development() -> Self {
        Self {
            enforce_https: false,
            add_security_headers: false,
            trusted_proxies: vec!["127.0.0.1".to_string(), "::1".to_string()],
        }
    }

    pub fn production() -> Self {
        Self {
            enforce_https: true,
            add_security_headers: true,
            trusted_proxies: vec![],
        }
    }

    /// Headers only, plain HTTP still accepted
    pub fn headers_only() -> Self {
        Self {
            enforce_https: false,
            add_security_headers: true,
            trusted_proxies: vec![],
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            enforce_https: self.enforce_https,
            add_security_headers: self.add_security_headers,
            trusted_proxies: Rc::new(self.trusted_proxies.clone()),
        }))
    }
}

pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    enforce_https: bool,
    add_security_headers: bool,
    trusted_proxies: Rc<Vec<String>>,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let enforce_https = self.enforce_https;
        let add_security_headers = self.add_security_headers;
        let trusted_proxies = Rc::clone(&self.trusted_proxies);

        Box::pin(async move {
            if enforce_https && !is_secure_request(&req, &trusted_proxies) {
                log::warn!("Insecure request blocked: {} {}", req.method(), req.path());
                return Ok(reject(req, StatusCode::FORBIDDEN, error_codes::FORBIDDEN, "HTTPS required"));
            }

            if let Some(origin) = req.headers().get(header::ORIGIN) {
                if !is_valid_origin(origin) {
                    log::warn!(
                        "Invalid origin blocked: {:?} for {} {}",
                        origin,
                        req.method(),
                        req.path()
                    );
                    return Ok(reject(
                        req,
                        StatusCode::BAD_REQUEST,
                        error_codes::BAD_REQUEST,
                        "Invalid request origin",
                    ));
                }
            }

            let mut response = service.call(req).await?;

            if add_security_headers {
                add_security_response_headers(&mut response);
            }

            Ok(response.map_into_left_body())
        })
    }
}

// Rejections stay on the `Ok` path so outer middleware still sees them
fn reject<B>(
    req: ServiceRequest,
    status: StatusCode,
    code: &str,
    message: &str,
) -> ServiceResponse<EitherBody<B>> {
    let response = ErrorResponse::new(code, message).to_response(status);
    req.into_response(response).map_into_right_body()
}

/// HTTPS directly, via a trusted proxy, or from the local host
fn is_secure_request(req: &ServiceRequest, trusted_proxies: &[String]) -> bool {
    let conn_info = req.connection_info();
    if conn_info.scheme() == "https" {
        return true;
    }

    if let Some(proto) = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
    {
        let peer_addr = req
            .peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_default();
        if proto.eq_ignore_ascii_case("https") && is_trusted_proxy(&peer_addr, trusted_proxies) {
            return true;
        }
    }

    let host = conn_info.host();
    host == "localhost"
        || host.starts_with("localhost:")
        || host.starts_with("127.0.0.1")
        || host.starts_with("[::1]")
}

fn is_trusted_proxy(peer_ip: &str, trusted_proxies: &[String]) -> bool {
    !peer_ip.is_empty() && trusted_proxies.iter().any(|trusted| trusted == peer_ip)
}

/// Origin must at least look like a web origin; CORS does the allow-listing
fn is_valid_origin(origin: &HeaderValue) -> bool {
    origin
        .to_str()
        .map(|origin| origin.starts_with("http://") || origin.starts_with("https://"))
        .unwrap_or(false)
}

fn add_security_response_headers<B>(response: &mut ServiceResponse<B>) {
    let headers = response.headers_mut();

    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none';"),
    );
    headers.insert(
        header::HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static("camera=(), geolocation=(), microphone=(), payment=(), usb=()"),
    );
}
