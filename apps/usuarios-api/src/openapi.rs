//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Usuarios API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Usuarios API",
        version = "0.1.0",
        description = "CRUD management API for the usuario resource"
    ),
    nest(
        (path = "/usuarios", api = domain_usuarios::ApiDoc)
    ),
    tags(
        (name = "usuarios", description = "Usuario management endpoints")
    )
)]
pub struct ApiDoc;
