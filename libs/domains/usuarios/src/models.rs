use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Status value that marks a usuario as visible through the get-by-id path.
pub const STATUS_ACTIVE: &str = "Active";

/// Custom validator rejecting empty or whitespace-only strings
fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Usuario entity - matches the usuarios table and the wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Usuario {
    /// Unique identifier, assigned by the database on create
    pub id: i64,
    /// Profile picture, stored inline as encoded text
    pub foto: Option<String>,
    /// Display name
    pub nombre: String,
    /// Comma-separated list of addresses kept in a single column
    pub emails: String,
    /// Optional gender
    pub genero: Option<String>,
    /// Free-form status; "Active"/"Inactive" expected
    pub status: String,
}

impl Usuario {
    /// Whether the status equals "Active", compared case-insensitively
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_ACTIVE)
    }

    /// Apply a partial update, leaving unset fields untouched
    pub fn apply_update(&mut self, update: UpdateUsuario) {
        if let Some(foto) = update.foto {
            self.foto = Some(foto);
        }
        if let Some(nombre) = update.nombre {
            self.nombre = nombre;
        }
        if let Some(emails) = update.emails {
            self.emails = emails;
        }
        if let Some(genero) = update.genero {
            self.genero = Some(genero);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

/// DTO for creating a new usuario
///
/// The identifier is normally omitted and assigned by the database; a
/// client-supplied id is honored so duplicate creates can be detected.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUsuario {
    pub id: Option<i64>,
    pub foto: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub nombre: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub emails: String,
    pub genero: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub status: String,
}

/// DTO for partially updating a usuario
///
/// One optional slot per mutable field. Unknown keys are rejected at the
/// deserialization boundary instead of being applied reflectively; the id
/// is immutable and therefore has no slot here.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateUsuario {
    pub foto: Option<String>,
    pub nombre: Option<String>,
    pub emails: Option<String>,
    pub genero: Option<String>,
    pub status: Option<String>,
}

/// A bounded slice of the usuarios table plus paging metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsuarioPage {
    pub items: Vec<Usuario>,
    /// Zero-based index of this page
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Query parameters for the paged listing
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Zero-based page index
    pub page: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario() -> Usuario {
        Usuario {
            id: 1,
            foto: None,
            nombre: "Ana".to_string(),
            emails: "a@x.com".to_string(),
            genero: Some("F".to_string()),
            status: "Active".to_string(),
        }
    }

    #[test]
    fn test_is_active_is_case_insensitive() {
        let mut u = usuario();
        assert!(u.is_active());

        u.status = "ACTIVE".to_string();
        assert!(u.is_active());

        u.status = "active".to_string();
        assert!(u.is_active());

        u.status = "Inactive".to_string();
        assert!(!u.is_active());
    }

    #[test]
    fn test_apply_update_changes_only_provided_fields() {
        let mut u = usuario();

        u.apply_update(UpdateUsuario {
            nombre: Some("Berta".to_string()),
            ..Default::default()
        });

        assert_eq!(u.nombre, "Berta");
        assert_eq!(u.emails, "a@x.com");
        assert_eq!(u.genero, Some("F".to_string()));
        assert_eq!(u.status, "Active");
    }

    #[test]
    fn test_apply_update_can_flip_status() {
        let mut u = usuario();

        u.apply_update(UpdateUsuario {
            status: Some("Inactive".to_string()),
            ..Default::default()
        });

        assert!(!u.is_active());
        assert_eq!(u.nombre, "Ana");
    }

    #[test]
    fn test_create_usuario_rejects_blank_required_fields() {
        let input = CreateUsuario {
            id: None,
            foto: None,
            nombre: "   ".to_string(),
            emails: "a@x.com".to_string(),
            genero: None,
            status: "Active".to_string(),
        };

        let err = input.validate().unwrap_err();
        assert!(err.field_errors().contains_key("nombre"));
    }

    #[test]
    fn test_create_usuario_accepts_minimal_input() {
        let input = CreateUsuario {
            id: None,
            foto: None,
            nombre: "Ana".to_string(),
            emails: "a@x.com,b@x.com".to_string(),
            genero: None,
            status: "Inactive".to_string(),
        };

        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_update_usuario_rejects_unknown_fields() {
        let result: Result<UpdateUsuario, _> =
            serde_json::from_value(serde_json::json!({ "apellido": "X" }));
        assert!(result.is_err());

        let result: Result<UpdateUsuario, _> =
            serde_json::from_value(serde_json::json!({ "id": 7 }));
        assert!(result.is_err(), "the id must not be patchable");
    }

    #[test]
    fn test_update_usuario_accepts_subsets() {
        let update: UpdateUsuario =
            serde_json::from_value(serde_json::json!({ "nombre": "X" })).unwrap();
        assert_eq!(update.nombre.as_deref(), Some("X"));
        assert!(update.emails.is_none());
    }
}
