//! Catalog API - REST server for the shoe catalog

use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_shoes::{InMemoryShoeRepository, ShoeService};
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

    // The catalog starts from the fixed seed set on every boot
    let repository = InMemoryShoeRepository::seeded();
    let service = ShoeService::new(repository);

    let api_routes = api::routes(service);
    let router = create_router::<openapi::ApiDoc>(api_routes);
    let app = router.merge(api::health::router());

    info!("Starting Catalog API on port {}", config.server.port);

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
