//! Tag repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Tag};

/// Repository for tag database operations
pub struct TagRepository;

impl TagRepository {
    /// All tags by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>(r#"SELECT * FROM tags ORDER BY name"#)
            .fetch_all(pool)
            .await?;

        Ok(tags)
    }

    /// Find tag by exact name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> AppResult<Option<Tag>> {
        let tag = sqlx::query_as::<_, Tag>(r#"SELECT * FROM tags WHERE name = $1"#)
            .bind(name)
            .fetch_optional(pool)
            .await?;

        Ok(tag)
    }

    /// Create a new tag
    pub async fn create(pool: &PgPool, name: &str, color: Option<&str>) -> AppResult<Tag> {
        let tag = sqlx::query_as::<_, Tag>(
            r#"
            INSERT INTO tags (name, color)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(color)
        .fetch_one(pool)
        .await?;

        Ok(tag)
    }

    /// Delete tag and its problem links; returns whether a row was removed
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM tags WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
