use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::models::{CreateUsuario, Usuario};

/// Sea-ORM Entity for the usuarios table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub foto: Option<String>,
    pub nombre: String,
    pub emails: String,
    pub genero: Option<String>,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Usuario
impl From<Model> for Usuario {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            foto: model.foto,
            nombre: model.nombre,
            emails: model.emails,
            genero: model.genero,
            status: model.status,
        }
    }
}

// Conversion from domain CreateUsuario to Sea-ORM ActiveModel;
// with no id in the input the column's identity default assigns one
impl From<CreateUsuario> for ActiveModel {
    fn from(input: CreateUsuario) -> Self {
        ActiveModel {
            id: input.id.map_or(NotSet, Set),
            foto: Set(input.foto),
            nombre: Set(input.nombre),
            emails: Set(input.emails),
            genero: Set(input.genero),
            status: Set(input.status),
        }
    }
}

// Conversion from a full domain Usuario for replace-and-save
impl From<Usuario> for ActiveModel {
    fn from(usuario: Usuario) -> Self {
        ActiveModel {
            id: Set(usuario.id),
            foto: Set(usuario.foto),
            nombre: Set(usuario.nombre),
            emails: Set(usuario.emails),
            genero: Set(usuario.genero),
            status: Set(usuario.status),
        }
    }
}
