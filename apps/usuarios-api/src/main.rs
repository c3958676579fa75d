//! Usuarios API - REST server for the usuario resource

use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_usuarios::{PgUsuarioRepository, UsuarioService};
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

    // Connect to PostgreSQL, retrying transient startup failures
    let db =
        database::postgres::connect_from_config_with_retry(config.postgres.clone(), None).await?;

    // Bring the schema up to date before accepting traffic
    database::postgres::run_migrations::<migration::Migrator>(&db, "usuarios_api").await?;

    // Explicit wiring: repository into service, service into the router
    let repository = PgUsuarioRepository::new(db.clone());
    let service = UsuarioService::new(repository);

    let api_routes = api::routes(service, db);
    let router = create_router::<openapi::ApiDoc>(api_routes);

    info!("Starting Usuarios API on {}", config.server.address());

    create_app(router, &config.server).await?;

    info!("Usuarios API shutdown complete");
    Ok(())
}
