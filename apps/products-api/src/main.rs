//! Products API - REST server

use axum_helpers::{cors_layer_for, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::FromEnv;
use database::postgres::{StartupPolicy, connect_with_policy};
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        "Starting {} v{} ({:?})",
        config.app.name, config.app.version, config.environment
    );

    let retry = config.database.retry_config();
    let db = connect_with_policy(config.database.clone(), retry).await?;

    if config.sync_schema {
        if let Err(e) = domain_products::sync_schema(&db).await {
            match config.database.startup_policy {
                StartupPolicy::FailFast => return Err(e.into()),
                StartupPolicy::Degrade => {
                    warn!(error = %e, "Could not create the products table, continuing")
                }
            }
        }
    }

    let state = AppState { db };

    let cors = cors_layer_for(&config.environment, &config.cors_allowed_origins)?;
    let app = create_router::<openapi::ApiDoc>(api::routes(&state), cors)
        .merge(health_router(config.app))
        .merge(api::health::router(&state));

    let db = state.db.clone();
    create_production_app(app, &config.server, config.shutdown_timeout, async move {
        info!("Shutting down: closing PostgreSQL connections");
        if let Err(e) = db.close().await {
            warn!(error = %e, "Failed to close PostgreSQL pool");
        }
    })
    .await?;

    info!("Products API shutdown complete");
    Ok(())
}
