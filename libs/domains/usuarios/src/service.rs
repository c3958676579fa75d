use std::sync::Arc;

use crate::error::UsuarioResult;
use crate::models::{CreateUsuario, Usuario, UsuarioPage};
use crate::repository::UsuarioRepository;

/// Number of rows per page for the listing operation
pub const PAGE_SIZE: u64 = 10;

/// Service layer for the usuario resource
///
/// A thin pass-through: the only derived rule is that callers must check
/// `if_exists` before `get_usuario_by_id` or `remove_usuario`, since those
/// do not themselves guard against a missing id.
#[derive(Clone)]
pub struct UsuarioService<R: UsuarioRepository> {
    repository: Arc<R>,
}

impl<R: UsuarioRepository> UsuarioService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Fetch the given zero-based page, always `PAGE_SIZE` rows per page
    pub async fn get_all_usuarios(&self, page: u64) -> UsuarioResult<UsuarioPage> {
        self.repository.find_page(page, PAGE_SIZE).await
    }

    /// Plain lookup; does not guard against a missing id
    pub async fn get_usuario_by_id(&self, id: i64) -> UsuarioResult<Option<Usuario>> {
        self.repository.find_by_id(id).await
    }

    /// Whether a usuario with this id exists
    pub async fn if_exists(&self, id: i64) -> UsuarioResult<bool> {
        self.repository.exists_by_id(id).await
    }

    /// Create a usuario
    pub async fn crear_usuario(&self, input: CreateUsuario) -> UsuarioResult<Usuario> {
        self.repository.insert(input).await
    }

    /// Full replace-and-save keyed by id
    pub async fn actualizar_usuario(&self, usuario: Usuario) -> UsuarioResult<Usuario> {
        self.repository.save(usuario).await
    }

    /// Delete by id; does not guard against a missing id
    pub async fn remove_usuario(&self, id: i64) -> UsuarioResult<bool> {
        self.repository.delete_by_id(id).await
    }
}
