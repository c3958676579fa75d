use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsuarioError {
    #[error("user with id {0} does not exist")]
    NotFound(i64),

    #[error("user with id {0} already exists")]
    Conflict(i64),

    #[error("database error: {0}")]
    Database(String),
}

pub type UsuarioResult<T> = Result<T, UsuarioError>;

// Status mapping is deliberately per-endpoint (the same error maps to
// different codes depending on the operation), so the handlers translate
// these variants themselves instead of a blanket IntoResponse impl.
