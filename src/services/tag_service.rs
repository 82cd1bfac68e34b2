//! Tag service

use sqlx::PgPool;

use crate::{
    db::repositories::TagRepository,
    error::{AppError, AppResult},
    handlers::tags::request::CreateTagRequest,
    models::Tag,
};

/// Tag service for business logic
pub struct TagService;

impl TagService {
    /// List tags by name
    pub async fn list_tags(pool: &PgPool) -> AppResult<Vec<Tag>> {
        TagRepository::list(pool).await
    }

    /// Create a new tag
    pub async fn create_tag(pool: &PgPool, payload: CreateTagRequest) -> AppResult<Tag> {
        let name = &payload.name;
        if TagRepository::find_by_name(pool, name).await?.is_some() {
            return Err(AppError::Conflict(format!("Tag '{name}' already exists")));
        }

        let tag = TagRepository::create(pool, name, payload.color.as_deref()).await?;

        tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");

        Ok(tag)
    }

    /// Delete a tag
    pub async fn delete_tag(pool: &PgPool, id: i64) -> AppResult<()> {
        if !TagRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Tag not found".to_string()));
        }

        tracing::info!(tag_id = id, "Tag deleted");

        Ok(())
    }
}
