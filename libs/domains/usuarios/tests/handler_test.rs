//! Handler tests for the usuarios domain
//!
//! These tests verify that the HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON / plain text)
//! - The per-endpoint HTTP status mapping
//!
//! They drive the domain router over the in-memory repository, so no
//! external services are needed.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_usuarios::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

fn test_app() -> (Router, UsuarioService<InMemoryUsuarioRepository>) {
    let repository = InMemoryUsuarioRepository::new();
    let service = UsuarioService::new(repository);
    (handlers::router(service.clone()), service)
}

fn create_input(nombre: &str, status: &str) -> CreateUsuario {
    CreateUsuario {
        id: None,
        foto: None,
        nombre: nombre.to_string(),
        emails: format!("{}@example.com", nombre.to_lowercase()),
        genero: None,
        status: status.to_string(),
    }
}

// Helper to parse a JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// Helper to read a plain-text response body
async fn text_body(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_usuario_returns_201_and_row_is_fetchable() {
    let (app, _service) = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "nombre": "Ana",
                "emails": "a@x.com",
                "status": "Active"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(text_body(response.into_body()).await, "user created successfully");

    // First insert gets id 1
    let response = app.oneshot(empty_request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let usuario: Usuario = json_body(response.into_body()).await;
    assert_eq!(usuario.nombre, "Ana");
    assert_eq!(usuario.status, "Active");
}

#[tokio::test]
async fn test_create_usuario_with_existing_id_conflicts() {
    let (app, service) = test_app();

    let mut input = create_input("Ana", "Active");
    input.id = Some(5);
    service.crear_usuario(input).await.unwrap();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "id": 5,
                "nombre": "Impostora",
                "emails": "i@x.com",
                "status": "Active"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        text_body(response.into_body()).await,
        "user with id 5 already exists"
    );

    // No duplicate row was created
    let page = service.get_all_usuarios(0).await.unwrap();
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].nombre, "Ana");
}

#[tokio::test]
async fn test_create_usuario_with_blank_required_field_is_rejected() {
    let (app, service) = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "nombre": "   ",
                "emails": "a@x.com",
                "status": "Active"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let page = service.get_all_usuarios(0).await.unwrap();
    assert_eq!(page.total_items, 0);
}

#[tokio::test]
async fn test_get_usuario_missing_returns_404_with_message() {
    let (app, _service) = test_app();

    let response = app.oneshot(empty_request("GET", "/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(text_body(response.into_body()).await, "user does not exist");
}

#[tokio::test]
async fn test_get_usuario_is_case_insensitive_about_active() {
    let (app, service) = test_app();

    service
        .crear_usuario(create_input("Ana", "aCtIvE"))
        .await
        .unwrap();

    let response = app.oneshot(empty_request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_usuario_inactive_returns_500_with_body() {
    let (app, service) = test_app();

    service
        .crear_usuario(create_input("Ana", "Inactive"))
        .await
        .unwrap();

    let response = app.oneshot(empty_request("GET", "/1")).await.unwrap();

    // A present but non-Active usuario is reported as a server error,
    // with the row still in the body
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let usuario: Usuario = json_body(response.into_body()).await;
    assert_eq!(usuario.nombre, "Ana");
    assert_eq!(usuario.status, "Inactive");
}

#[tokio::test]
async fn test_patch_changes_only_the_named_field() {
    let (app, service) = test_app();

    let mut input = create_input("Ana", "Active");
    input.genero = Some("F".to_string());
    let created = service.crear_usuario(input).await.unwrap();

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/{}", created.id),
            json!({ "nombre": "Berta" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        text_body(response.into_body()).await,
        format!("user with id {} updated successfully", created.id)
    );

    let updated = service
        .get_usuario_by_id(created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.nombre, "Berta");
    assert_eq!(updated.emails, created.emails);
    assert_eq!(updated.genero, Some("F".to_string()));
    assert_eq!(updated.status, "Active");
}

#[tokio::test]
async fn test_patch_unknown_field_is_rejected_before_saving() {
    let (app, service) = test_app();

    let created = service
        .crear_usuario(create_input("Ana", "Active"))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/{}", created.id),
            json!({ "apellido": "X" }),
        ))
        .await
        .unwrap();

    assert!(
        response.status().is_client_error(),
        "unknown fields are a client error, got {}",
        response.status()
    );

    let unchanged = service
        .get_usuario_by_id(created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.nombre, "Ana");
}

#[tokio::test]
async fn test_patch_missing_usuario_returns_404() {
    let (app, _service) = test_app();

    let response = app
        .oneshot(json_request("PATCH", "/42", json!({ "nombre": "X" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        text_body(response.into_body()).await,
        "user with id 42 does not exist"
    );
}

#[tokio::test]
async fn test_put_replaces_the_full_row() {
    let (app, service) = test_app();

    let mut input = create_input("Ana", "Active");
    input.genero = Some("F".to_string());
    let created = service.crear_usuario(input).await.unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/",
            json!({
                "id": created.id,
                "foto": null,
                "nombre": "Berta",
                "emails": "b@x.com",
                "genero": null,
                "status": "Inactive"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let replaced = service
        .get_usuario_by_id(created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replaced.nombre, "Berta");
    assert_eq!(replaced.emails, "b@x.com");
    assert_eq!(replaced.genero, None, "full replace clears unset fields");
    assert_eq!(replaced.status, "Inactive");
}

#[tokio::test]
async fn test_put_missing_usuario_returns_404() {
    let (app, _service) = test_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/",
            json!({
                "id": 42,
                "foto": null,
                "nombre": "Nadie",
                "emails": "n@x.com",
                "genero": null,
                "status": "Active"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_returns_404() {
    let (app, service) = test_app();

    let created = service
        .crear_usuario(create_input("Ana", "Active"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        text_body(response.into_body()).await,
        format!("user with id {} deleted successfully", created.id)
    );

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting the same id again is also a 404
    let response = app
        .oneshot(empty_request("DELETE", &format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_pages_within_bounds() {
    let (app, service) = test_app();

    for i in 0..12 {
        service
            .crear_usuario(create_input(&format!("U{}", i), "Active"))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/?page=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page: UsuarioPage = json_body(response.into_body()).await;
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total_items, 12);
    assert_eq!(page.total_pages, 2);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/?page=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page: UsuarioPage = json_body(response.into_body()).await;
    assert_eq!(page.items.len(), 2);
}

#[tokio::test]
async fn test_list_past_the_last_page_returns_404() {
    let (app, service) = test_app();

    for i in 0..12 {
        service
            .crear_usuario(create_input(&format!("U{}", i), "Active"))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/?page=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(empty_request("GET", "/?page=9999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_on_empty_store_has_no_page_zero() {
    let (app, _service) = test_app();

    let response = app.oneshot(empty_request("GET", "/?page=0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_requires_the_page_parameter() {
    let (app, _service) = test_app();

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lifecycle_create_get_deactivate_get() {
    let (app, _service) = test_app();

    // Create
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({
                "nombre": "Ana",
                "emails": "a@x.com",
                "status": "Active"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Fetch while Active
    let response = app.clone().oneshot(empty_request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let usuario: Usuario = json_body(response.into_body()).await;
    assert_eq!(usuario.status, "Active");

    // Deactivate via PATCH
    let response = app
        .clone()
        .oneshot(json_request("PATCH", "/1", json!({ "status": "Inactive" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Fetch again: server error status, but the row is still in the body
    let response = app.oneshot(empty_request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let usuario: Usuario = json_body(response.into_body()).await;
    assert_eq!(usuario.nombre, "Ana");
    assert_eq!(usuario.status, "Inactive");
}
