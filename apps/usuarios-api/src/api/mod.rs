//! API routes module

pub mod health;

use axum::Router;
use database::postgres::DatabaseConnection;
use domain_usuarios::{handlers, UsuarioRepository, UsuarioService};

/// Create all API routes
pub fn routes<R: UsuarioRepository + 'static>(
    service: UsuarioService<R>,
    db: DatabaseConnection,
) -> Router {
    Router::new()
        .nest("/usuarios", handlers::router(service))
        .merge(health::router(db))
}
