use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use hw_api::{config, create_app, seed, AppState};
use hw_core::repositories::{InMemoryComponentRepository, InMemoryConfigurationRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::load();
    config::init_logging(&app_config.logging);

    info!(
        "Starting HardwareHub API Server ({} environment)",
        app_config.environment
    );

    let catalog = seed::sample_catalog();
    info!("Loaded {} catalog components", catalog.len());

    let state = web::Data::new(AppState::new(
        Arc::new(InMemoryComponentRepository::with_components(catalog)),
        Arc::new(InMemoryConfigurationRepository::new()),
        &app_config,
    ));

    let bind_address = app_config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = app_config.server.workers;
    let keep_alive = Duration::from_secs(app_config.server.keep_alive);
    let server_config = app_config.clone();

    let mut server = HttpServer::new(move || create_app(state.clone(), &server_config))
        .keep_alive(keep_alive);
    // 0 keeps actix's default of one worker per core
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}
