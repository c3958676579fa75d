use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};

use crate::{
    entity,
    error::{UsuarioError, UsuarioResult},
    models::{CreateUsuario, Usuario, UsuarioPage},
    repository::UsuarioRepository,
};

/// PostgreSQL implementation of UsuarioRepository on Sea-ORM
pub struct PgUsuarioRepository {
    db: DatabaseConnection,
}

impl PgUsuarioRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsuarioRepository for PgUsuarioRepository {
    async fn insert(&self, input: CreateUsuario) -> UsuarioResult<Usuario> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| UsuarioError::Database(e.to_string()))?;

        tracing::info!(usuario_id = model.id, "Created usuario");
        Ok(model.into())
    }

    async fn save(&self, usuario: Usuario) -> UsuarioResult<Usuario> {
        let id = usuario.id;
        let exists = self.exists_by_id(id).await?;

        let active_model: entity::ActiveModel = usuario.into();
        let model = if exists {
            active_model.update(&self.db).await
        } else {
            active_model.insert(&self.db).await
        }
        .map_err(|e| UsuarioError::Database(e.to_string()))?;

        tracing::info!(usuario_id = id, "Saved usuario");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> UsuarioResult<Option<Usuario>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UsuarioError::Database(e.to_string()))?;

        Ok(model.map(Into::into))
    }

    async fn exists_by_id(&self, id: i64) -> UsuarioResult<bool> {
        let exists = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UsuarioError::Database(e.to_string()))?
            .is_some();

        Ok(exists)
    }

    async fn delete_by_id(&self, id: i64) -> UsuarioResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| UsuarioError::Database(e.to_string()))?;

        if result.rows_affected > 0 {
            tracing::info!(usuario_id = id, "Deleted usuario");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn find_page(&self, page: u64, page_size: u64) -> UsuarioResult<UsuarioPage> {
        // One repository call yields both the slice and the derived totals
        let total_items = entity::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| UsuarioError::Database(e.to_string()))?;

        let total_pages = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };

        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .limit(page_size)
            .offset(page.saturating_mul(page_size))
            .all(&self.db)
            .await
            .map_err(|e| UsuarioError::Database(e.to_string()))?;

        Ok(UsuarioPage {
            items: models.into_iter().map(Into::into).collect(),
            page,
            page_size,
            total_items,
            total_pages,
        })
    }
}
