//! HTTP route handlers, one module per API area

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod configurations;
pub mod configurator;
pub mod health;
pub mod shipping;
pub mod specs;
pub mod stats;

use actix_web::web;

use hw_core::repositories::{ComponentRepository, ConfigurationRepository};

/// Register every `/api/v1` route
pub fn configure_v1<C, G>(cfg: &mut web::ServiceConfig)
where
    C: ComponentRepository + 'static,
    G: ConfigurationRepository + 'static,
{
    cfg.route("", web::get().to(health::api_index))
        .route("/", web::get().to(health::api_index))
        .service(
            web::scope("/components")
                .route("", web::get().to(catalog::list_components::<C, G>))
                .route("/{id}", web::get().to(catalog::get_component::<C, G>)),
        )
        .service(
            web::scope("/configurator")
                .route("/quote", web::post().to(configurator::quote::<C, G>))
                .route("/psu", web::get().to(configurator::psu)),
        )
        .service(
            web::scope("/shipping").route("/rates", web::post().to(shipping::rates::<C, G>)),
        )
        .service(
            web::scope("/specs")
                .route("/normalize", web::get().to(specs::normalize))
                .route("/keys", web::get().to(specs::keys)),
        )
        .service(
            web::scope("/auth")
                .route("/password-strength", web::post().to(auth::password_strength)),
        )
        .service(
            web::scope("/configurations")
                .route("", web::post().to(configurations::create::<C, G>))
                // registered before `/{id}` so it is not captured as an id
                .route("/public", web::get().to(configurations::list_public::<C, G>))
                .route("/{id}", web::get().to(configurations::get::<C, G>))
                .route("/{id}", web::put().to(configurations::revise::<C, G>))
                .route("/{id}/submit", web::post().to(configurations::submit::<C, G>)),
        )
        .service(
            web::scope("/admin/configurations")
                .route("/pending", web::get().to(admin::list_pending::<C, G>))
                .route("/{id}/approve", web::post().to(admin::approve::<C, G>))
                .route("/{id}/reject", web::post().to(admin::reject::<C, G>)),
        )
        .route("/stats", web::get().to(stats::stats::<C, G>));
}
