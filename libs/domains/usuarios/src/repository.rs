use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UsuarioError, UsuarioResult};
use crate::models::{CreateUsuario, Usuario, UsuarioPage};

/// Repository trait for Usuario persistence
///
/// Defines the data access interface for usuarios. Implementations can use
/// different storage backends (PostgreSQL, in-memory).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    /// Insert a new usuario; the id comes from storage unless supplied
    async fn insert(&self, input: CreateUsuario) -> UsuarioResult<Usuario>;

    /// Upsert keyed by id: insert if the id is new, replace otherwise
    async fn save(&self, usuario: Usuario) -> UsuarioResult<Usuario>;

    /// Get a usuario by ID
    async fn find_by_id(&self, id: i64) -> UsuarioResult<Option<Usuario>>;

    /// Check whether a usuario with this ID exists
    async fn exists_by_id(&self, id: i64) -> UsuarioResult<bool>;

    /// Delete a usuario by ID, reporting whether a row was removed
    async fn delete_by_id(&self, id: i64) -> UsuarioResult<bool>;

    /// Fetch a zero-based page ordered by id; pages past the end are an
    /// empty page, not an error
    async fn find_page(&self, page: u64, page_size: u64) -> UsuarioResult<UsuarioPage>;
}

/// In-memory implementation of UsuarioRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUsuarioRepository {
    usuarios: Arc<RwLock<BTreeMap<i64, Usuario>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryUsuarioRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UsuarioRepository for InMemoryUsuarioRepository {
    async fn insert(&self, input: CreateUsuario) -> UsuarioResult<Usuario> {
        let mut usuarios = self.usuarios.write().await;

        let id = match input.id {
            Some(id) => {
                if usuarios.contains_key(&id) {
                    return Err(UsuarioError::Conflict(id));
                }
                // Keep the counter ahead of explicitly chosen ids
                self.next_id.fetch_max(id, Ordering::SeqCst);
                id
            }
            None => self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
        };

        let usuario = Usuario {
            id,
            foto: input.foto,
            nombre: input.nombre,
            emails: input.emails,
            genero: input.genero,
            status: input.status,
        };
        usuarios.insert(id, usuario.clone());

        tracing::info!(usuario_id = id, "Created usuario");
        Ok(usuario)
    }

    async fn save(&self, usuario: Usuario) -> UsuarioResult<Usuario> {
        let mut usuarios = self.usuarios.write().await;

        self.next_id.fetch_max(usuario.id, Ordering::SeqCst);
        usuarios.insert(usuario.id, usuario.clone());

        tracing::info!(usuario_id = usuario.id, "Saved usuario");
        Ok(usuario)
    }

    async fn find_by_id(&self, id: i64) -> UsuarioResult<Option<Usuario>> {
        let usuarios = self.usuarios.read().await;
        Ok(usuarios.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> UsuarioResult<bool> {
        let usuarios = self.usuarios.read().await;
        Ok(usuarios.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> UsuarioResult<bool> {
        let mut usuarios = self.usuarios.write().await;

        if usuarios.remove(&id).is_some() {
            tracing::info!(usuario_id = id, "Deleted usuario");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn find_page(&self, page: u64, page_size: u64) -> UsuarioResult<UsuarioPage> {
        let usuarios = self.usuarios.read().await;

        let total_items = usuarios.len() as u64;
        let total_pages = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };

        // BTreeMap iteration is id-ascending already
        let items: Vec<Usuario> = usuarios
            .values()
            .skip(page.saturating_mul(page_size).min(total_items) as usize)
            .take(page_size as usize)
            .cloned()
            .collect();

        Ok(UsuarioPage {
            items,
            page,
            page_size,
            total_items,
            total_pages,
        })
    }
}
