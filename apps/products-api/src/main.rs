//! Products API - REST server

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::common::RetryConfig;
use database::postgres::{connect_from_config_with_retry, run_migrations};
use domain_products::PgProductRepository;
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        max_connections = config.postgres.max_connections,
        "Connecting to PostgreSQL"
    );

    let retry = RetryConfig::new().with_max_retries(5);
    let db = connect_from_config_with_retry(config.postgres.clone(), Some(retry)).await?;

    if config.run_migrations {
        run_migrations::<Migrator>(&db, config.app.name).await?;
    } else {
        info!("RUN_MIGRATIONS disabled, skipping schema sync");
    }

    let api_routes = api::routes(PgProductRepository::new(db.clone()));
    let router = create_router::<openapi::ApiDoc>(api_routes, &config.cors)?;
    let app = router
        .merge(health_router(config.app))
        .merge(api::health::router(db.clone()));

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing PostgreSQL connections");
        if let Err(e) = db.close().await {
            tracing::warn!("Failed to close PostgreSQL pool: {}", e);
        }
    })
    .await?;

    info!("Products API shutdown complete");
    Ok(())
}
