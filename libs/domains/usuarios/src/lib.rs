//! Usuarios Domain
//!
//! This module provides a complete domain implementation for managing the
//! usuario resource.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← existence checks, delegation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, page
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_usuarios::{
//!     handlers,
//!     repository::InMemoryUsuarioRepository,
//!     service::UsuarioService,
//! };
//!
//! // Create repository and service
//! let repository = InMemoryUsuarioRepository::new();
//! let service = UsuarioService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UsuarioError, UsuarioResult};
pub use handlers::ApiDoc;
pub use models::{CreateUsuario, PageQuery, UpdateUsuario, Usuario, UsuarioPage};
pub use postgres::PgUsuarioRepository;
pub use repository::{InMemoryUsuarioRepository, UsuarioRepository};
pub use service::{UsuarioService, PAGE_SIZE};
