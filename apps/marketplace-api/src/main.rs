use axum_helpers::{create_production_app, create_router, cors_layer_from_env, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use object_storage::S3ObjectStorage;
use tracing::info;

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

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());
    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;
    info!(database = config.mongodb.database(), "Connected to MongoDB");

    let storage = S3ObjectStorage::from_config(config.s3.clone()).await;
    let state = AppState::new(config, mongo_client, storage);

    let api_routes = api::routes(
        state.store.clone(),
        state.storage.clone(),
        state.config.product_upload_max_bytes,
    );
    let cors = cors_layer_from_env(&state.config.environment)?;

    let app = create_router::<openapi::ApiDoc>(api_routes, cors)
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.db.clone()));

    info!(
        "Starting {} v{} (shutdown timeout {:?})",
        state.config.app.name, state.config.app.version, state.config.server.shutdown_timeout
    );

    let mongo_client = state.mongo_client.clone();
    create_production_app(app, &state.config.server, async move {
        info!("Shutting down: closing MongoDB connections");
        mongo_client.shutdown().await;
        info!("MongoDB connections closed");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Marketplace API shutdown complete");
    Ok(())
}
