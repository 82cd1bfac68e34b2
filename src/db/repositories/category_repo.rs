//! Category repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Category, CategoryProgress, CategoryWithProgress, Page, Problem},
};

/// Repository for category database operations
pub struct CategoryRepository;

impl CategoryRepository {
    /// All categories by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(r#"SELECT * FROM categories ORDER BY name"#)
            .fetch_all(pool)
            .await?;

        Ok(categories)
    }

    /// All categories by name, each with its progress counters
    pub async fn list_with_stats(pool: &PgPool) -> AppResult<Vec<CategoryWithProgress>> {
        let categories = sqlx::query_as::<_, CategoryWithProgress>(
            r#"
            SELECT
                c.*,
                COUNT(pc.problem_id) AS problems_count,
                COUNT(pc.problem_id) FILTER (WHERE sc.solutions > 0) AS solved_count,
                COALESCE(SUM(sc.solutions), 0)::bigint AS total_solutions
            FROM categories c
            LEFT JOIN problem_categories pc ON pc.category_id = c.id
            LEFT JOIN (
                SELECT problem_id, COUNT(*) AS solutions
                FROM solutions
                GROUP BY problem_id
            ) sc ON sc.problem_id = pc.problem_id
            GROUP BY c.id
            ORDER BY c.name
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    /// Progress counters of one category
    pub async fn progress(pool: &PgPool, id: i64) -> AppResult<CategoryProgress> {
        let progress = sqlx::query_as::<_, CategoryProgress>(
            r#"
            SELECT
                COUNT(pc.problem_id) AS problems_count,
                COUNT(pc.problem_id) FILTER (WHERE sc.solutions > 0) AS solved_count,
                COALESCE(SUM(sc.solutions), 0)::bigint AS total_solutions
            FROM problem_categories pc
            LEFT JOIN (
                SELECT problem_id, COUNT(*) AS solutions
                FROM solutions
                GROUP BY problem_id
            ) sc ON sc.problem_id = pc.problem_id
            WHERE pc.category_id = $1
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(progress)
    }

    /// Find category by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(r#"SELECT * FROM categories WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(category)
    }

    /// Find category by exact name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> AppResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(r#"SELECT * FROM categories WHERE name = $1"#)
            .bind(name)
            .fetch_optional(pool)
            .await?;

        Ok(category)
    }

    /// Create a new category
    pub async fn create(pool: &PgPool, name: &str, description: Option<&str>) -> AppResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(pool)
        .await?;

        Ok(category)
    }

    /// Apply a partial update; returns `None` when the category does not exist
    pub async fn update(
        pool: &PgPool,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(pool)
        .await?;

        Ok(category)
    }

    /// Delete category; returns whether a row was removed.
    ///
    /// Fails with a foreign-key violation while problems are still filed
    /// under it.
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM categories WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of problems filed under a category
    pub async fn problem_count(pool: &PgPool, id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM problem_categories WHERE category_id = $1"#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// A page of the category's problems by LeetCode number, with the total
    pub async fn problems_page(pool: &PgPool, id: i64, page: Page) -> AppResult<(Vec<Problem>, i64)> {
        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT p.*
            FROM problems p
            JOIN problem_categories pc ON pc.problem_id = p.id
            WHERE pc.category_id = $1
            ORDER BY p.lc_id ASC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(id)
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(pool)
        .await?;

        let total = Self::problem_count(pool, id).await?;

        Ok((problems, total))
    }
}
