//! Application factory
//!
//! Builds the Actix-web application around a shared `AppState`.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};

use hw_core::repositories::{ComponentRepository, ConfigurationRepository};
use hw_shared::config::AppConfig;

use crate::handlers::{json_error_handler, path_error_handler, query_error_handler};
use crate::middleware::{create_cors, RequestIdMiddleware, SecurityMiddleware};
use crate::routes::{self, health};
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<C, G>(
    app_state: web::Data<AppState<C, G>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    C: ComponentRepository + 'static,
    G: ConfigurationRepository + 'static,
{
    let cors = create_cors(&config.cors);
    let security = SecurityMiddleware::for_environment(config.environment);

    App::new()
        .app_data(app_state)
        .app_data(
            web::JsonConfig::default()
                .limit(config.server.max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // the first `wrap` is innermost: security rejections still get a
        // request id, and the logger sees it on every response
        .wrap(security)
        .wrap(RequestIdMiddleware)
        .wrap(cors)
        .wrap(Logger::new(
            "%a \"%r\" %s %b %T request_id=%{x-request-id}o",
        ))
        .route("/health", web::get().to(health::health_check::<C, G>))
        .service(web::scope("/api/v1").configure(routes::configure_v1::<C, G>))
        .default_service(web::route().to(health::not_found))
}
