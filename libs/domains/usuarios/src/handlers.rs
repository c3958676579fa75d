use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UsuarioError;
use crate::models::{CreateUsuario, PageQuery, UpdateUsuario, Usuario, UsuarioPage};
use crate::repository::UsuarioRepository;
use crate::service::UsuarioService;

/// OpenAPI documentation for the usuarios API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_usuarios,
        create_usuario,
        update_usuario,
        get_usuario,
        patch_usuario,
        delete_usuario,
    ),
    components(schemas(Usuario, UsuarioPage, CreateUsuario, UpdateUsuario)),
    tags(
        (name = "usuarios", description = "Usuario management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the usuario router with all HTTP endpoints
pub fn router<R: UsuarioRepository + 'static>(service: UsuarioService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_usuarios).post(create_usuario).put(update_usuario),
        )
        .route(
            "/{id}",
            get(get_usuario).patch(patch_usuario).delete(delete_usuario),
        )
        .with_state(shared_service)
}

/// List usuarios, ten per page
#[utoipa::path(
    get,
    path = "",
    tag = "usuarios",
    params(PageQuery),
    responses(
        (status = 200, description = "The requested page", body = UsuarioPage),
        (status = 404, description = "Page index at or past the last page"),
        (status = 500, description = "Storage failure")
    )
)]
async fn list_usuarios<R: UsuarioRepository>(
    State(service): State<Arc<UsuarioService<R>>>,
    Query(query): Query<PageQuery>,
) -> Response {
    match service.get_all_usuarios(query.page).await {
        Ok(pagina) if query.page < pagina.total_pages => {
            (StatusCode::OK, Json(pagina)).into_response()
        }
        Ok(_) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to list usuarios");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Get a usuario by id
///
/// A usuario whose status is not "Active" is reported as a server error,
/// with the row still included in the body.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "usuarios",
    params(
        ("id" = i64, Path, description = "Usuario ID")
    ),
    responses(
        (status = 200, description = "Usuario found and Active", body = Usuario),
        (status = 404, description = "No usuario with this id"),
        (status = 500, description = "Usuario found but not Active", body = Usuario),
        (status = 501, description = "Storage failure")
    )
)]
async fn get_usuario<R: UsuarioRepository>(
    State(service): State<Arc<UsuarioService<R>>>,
    Path(id): Path<i64>,
) -> Response {
    match service.if_exists(id).await {
        Ok(true) => {
            let lookup = service
                .get_usuario_by_id(id)
                .await
                .and_then(|found| found.ok_or(UsuarioError::NotFound(id)));

            match lookup {
                Ok(usuario) if usuario.is_active() => {
                    (StatusCode::OK, Json(usuario)).into_response()
                }
                Ok(usuario) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, Json(usuario)).into_response()
                }
                Err(error) => (
                    StatusCode::NOT_IMPLEMENTED,
                    format!("error fetching user with id {}: {}", id, error),
                )
                    .into_response(),
            }
        }
        Ok(false) => (StatusCode::NOT_FOUND, "user does not exist".to_string()).into_response(),
        Err(error) => (
            StatusCode::NOT_IMPLEMENTED,
            format!("error fetching user with id {}: {}", id, error),
        )
            .into_response(),
    }
}

/// Create a usuario
#[utoipa::path(
    post,
    path = "",
    tag = "usuarios",
    request_body = CreateUsuario,
    responses(
        (status = 201, description = "Usuario created"),
        (status = 400, description = "Blank required field"),
        (status = 409, description = "Supplied id already taken, or storage failure")
    )
)]
async fn create_usuario<R: UsuarioRepository>(
    State(service): State<Arc<UsuarioService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUsuario>,
) -> Response {
    if let Some(id) = input.id {
        match service.if_exists(id).await {
            Ok(true) => {
                return (
                    StatusCode::CONFLICT,
                    format!("user with id {} already exists", id),
                )
                    .into_response();
            }
            Ok(false) => {}
            Err(error) => {
                return (
                    StatusCode::CONFLICT,
                    format!("error creating user: {}", error),
                )
                    .into_response();
            }
        }
    }

    match service.crear_usuario(input).await {
        Ok(_) => (StatusCode::CREATED, "user created successfully".to_string()).into_response(),
        Err(error) => (
            StatusCode::CONFLICT,
            format!("error creating user: {}", error),
        )
            .into_response(),
    }
}

/// Partially update a usuario by id
///
/// The body carries any subset of the mutable fields; unknown keys are
/// rejected by the JSON boundary before this handler runs.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "usuarios",
    params(
        ("id" = i64, Path, description = "Usuario ID")
    ),
    request_body = UpdateUsuario,
    responses(
        (status = 200, description = "Usuario updated"),
        (status = 404, description = "No usuario with this id"),
        (status = 500, description = "Storage failure")
    )
)]
async fn patch_usuario<R: UsuarioRepository>(
    State(service): State<Arc<UsuarioService<R>>>,
    Path(id): Path<i64>,
    Json(campos): Json<UpdateUsuario>,
) -> Response {
    match service.if_exists(id).await {
        Ok(true) => {
            // Load-merge-save: there is no partial-field persistence primitive
            let result = async {
                let mut usuario = service
                    .get_usuario_by_id(id)
                    .await?
                    .ok_or(UsuarioError::NotFound(id))?;
                usuario.apply_update(campos);
                service.actualizar_usuario(usuario).await
            }
            .await;

            match result {
                Ok(_) => (
                    StatusCode::OK,
                    format!("user with id {} updated successfully", id),
                )
                    .into_response(),
                Err(error) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("error updating user with id {}: {}", id, error),
                )
                    .into_response(),
            }
        }
        Ok(false) => (
            StatusCode::NOT_FOUND,
            format!("user with id {} does not exist", id),
        )
            .into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("error updating user with id {}: {}", id, error),
        )
            .into_response(),
    }
}

/// Fully replace a usuario
///
/// The body is a complete usuario including its id; update paths do not
/// re-validate field contents.
#[utoipa::path(
    put,
    path = "",
    tag = "usuarios",
    request_body = Usuario,
    responses(
        (status = 200, description = "Usuario replaced"),
        (status = 404, description = "No usuario with this id"),
        (status = 500, description = "Storage failure")
    )
)]
async fn update_usuario<R: UsuarioRepository>(
    State(service): State<Arc<UsuarioService<R>>>,
    Json(usuario): Json<Usuario>,
) -> Response {
    let id = usuario.id;

    match service.if_exists(id).await {
        Ok(true) => match service.actualizar_usuario(usuario).await {
            Ok(_) => (
                StatusCode::OK,
                format!("user with id {} updated successfully", id),
            )
                .into_response(),
            Err(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("error updating user with id {}: {}", id, error),
            )
                .into_response(),
        },
        Ok(false) => (
            StatusCode::NOT_FOUND,
            format!("user with id {} does not exist", id),
        )
            .into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("error updating user with id {}: {}", id, error),
        )
            .into_response(),
    }
}

/// Delete a usuario by id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "usuarios",
    params(
        ("id" = i64, Path, description = "Usuario ID")
    ),
    responses(
        (status = 200, description = "Usuario deleted"),
        (status = 404, description = "No usuario with this id"),
        (status = 500, description = "Storage failure")
    )
)]
async fn delete_usuario<R: UsuarioRepository>(
    State(service): State<Arc<UsuarioService<R>>>,
    Path(id): Path<i64>,
) -> Response {
    match service.if_exists(id).await {
        Ok(true) => match service.remove_usuario(id).await {
            Ok(_) => (
                StatusCode::OK,
                format!("user with id {} deleted successfully", id),
            )
                .into_response(),
            Err(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("error deleting user with id {}: {}", id, error),
            )
                .into_response(),
        },
        Ok(false) => (
            StatusCode::NOT_FOUND,
            format!("user with id {} does not exist", id),
        )
            .into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("error deleting user with id {}: {}", id, error),
        )
            .into_response(),
    }
}
