//! Problem repository

use sqlx::{PgConnection, PgPool};

use crate::{
    error::AppResult,
    models::{
        NewProblem, Page, Problem, ProblemCategory, ProblemChanges, ProblemFilter, ProblemTag,
        TextSearch,
    },
};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// List problems matching a filter, newest first
    pub async fn list(pool: &PgPool, filter: &ProblemFilter, page: Page) -> AppResult<(Vec<Problem>, i64)> {
        let difficulty = filter.difficulty.map(|d| d.as_str());
        let search_pattern = filter.search.as_ref().map(TextSearch::ilike_pattern);

        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problems
            WHERE
                ($1::text IS NULL OR difficulty = $1)
                AND ($2::text IS NULL OR title ILIKE $2 OR description ILIKE $2)
                AND ($3::boolean IS NULL OR starred = $3)
            ORDER BY created_at DESC, id DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(difficulty)
        .bind(&search_pattern)
        .bind(filter.starred)
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM problems
            WHERE
                ($1::text IS NULL OR difficulty = $1)
                AND ($2::text IS NULL OR title ILIKE $2 OR description ILIKE $2)
                AND ($3::boolean IS NULL OR starred = $3)
            "#,
        )
        .bind(difficulty)
        .bind(&search_pattern)
        .bind(filter.starred)
        .fetch_one(pool)
        .await?;

        Ok((problems, count))
    }

    /// Find problem by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Find problem by its LeetCode number
    pub async fn find_by_lc_id(pool: &PgPool, lc_id: i32) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE lc_id = $1"#)
            .bind(lc_id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Create a problem together with its tag and category links
    pub async fn create(
        pool: &PgPool,
        new: &NewProblem,
        tag_ids: &[i64],
        category_ids: &[i64],
    ) -> AppResult<Problem> {
        let mut tx = pool.begin().await?;

        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (lc_id, title, difficulty, url, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(new.lc_id)
        .bind(&new.title)
        .bind(new.difficulty.as_str())
        .bind(&new.url)
        .bind(&new.description)
        .fetch_one(&mut *tx)
        .await?;

        Self::set_tags(&mut tx, problem.id, tag_ids).await?;
        Self::set_categories(&mut tx, problem.id, category_ids).await?;

        tx.commit().await?;

        Ok(problem)
    }

    /// Apply a partial update; link lists replace the current links when given.
    /// Returns `None` when the problem does not exist.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        changes: &ProblemChanges,
        tag_ids: Option<&[i64]>,
        category_ids: Option<&[i64]>,
    ) -> AppResult<Option<Problem>> {
        let mut tx = pool.begin().await?;

        let problem = sqlx::query_as::<_, Problem>(
            r#"
            UPDATE problems
            SET
                lc_id = COALESCE($2, lc_id),
                title = COALESCE($3, title),
                difficulty = COALESCE($4, difficulty),
                url = COALESCE($5, url),
                description = COALESCE($6, description),
                starred = COALESCE($7, starred),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.lc_id)
        .bind(&changes.title)
        .bind(changes.difficulty.map(|d| d.as_str()))
        .bind(&changes.url)
        .bind(&changes.description)
        .bind(changes.starred)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(problem) = problem else {
            return Ok(None);
        };

        if let Some(tag_ids) = tag_ids {
            Self::set_tags(&mut tx, id, tag_ids).await?;
        }
        if let Some(category_ids) = category_ids {
            Self::set_categories(&mut tx, id, category_ids).await?;
        }

        tx.commit().await?;

        Ok(Some(problem))
    }

    /// Delete a problem and, by cascade, its solutions and links.
    /// Returns the number of solutions removed, or `None` when the problem
    /// does not exist.
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<Option<i64>> {
        let deleted_solutions = sqlx::query_scalar::<_, i64>(
            r#"
            WITH removed AS (DELETE FROM problems WHERE id = $1 RETURNING id)
            SELECT (SELECT COUNT(*) FROM solutions WHERE problem_id = $1) FROM removed
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(deleted_solutions)
    }

    /// Replace the tags linked to a problem
    pub async fn set_tags(conn: &mut PgConnection, problem_id: i64, tag_ids: &[i64]) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM problem_tags WHERE problem_id = $1"#)
            .bind(problem_id)
            .execute(&mut *conn)
            .await?;

        if !tag_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO problem_tags (problem_id, tag_id)
                SELECT DISTINCT $1::bigint, tag_id FROM UNNEST($2::bigint[]) AS tag_id
                "#,
            )
            .bind(problem_id)
            .bind(tag_ids)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }

    /// Replace the categories a problem is filed under
    pub async fn set_categories(
        conn: &mut PgConnection,
        problem_id: i64,
        category_ids: &[i64],
    ) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM problem_categories WHERE problem_id = $1"#)
            .bind(problem_id)
            .execute(&mut *conn)
            .await?;

        if !category_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO problem_categories (problem_id, category_id)
                SELECT DISTINCT $1::bigint, category_id FROM UNNEST($2::bigint[]) AS category_id
                "#,
            )
            .bind(problem_id)
            .bind(category_ids)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }

    /// Tags of several problems at once, by name
    pub async fn tags_for(pool: &PgPool, problem_ids: &[i64]) -> AppResult<Vec<ProblemTag>> {
        let tags = sqlx::query_as::<_, ProblemTag>(
            r#"
            SELECT pt.problem_id, t.id, t.name, t.color
            FROM problem_tags pt
            JOIN tags t ON t.id = pt.tag_id
            WHERE pt.problem_id = ANY($1)
            ORDER BY t.name
            "#,
        )
        .bind(problem_ids)
        .fetch_all(pool)
        .await?;

        Ok(tags)
    }

    /// Categories of several problems at once, by name
    pub async fn categories_for(pool: &PgPool, problem_ids: &[i64]) -> AppResult<Vec<ProblemCategory>> {
        let categories = sqlx::query_as::<_, ProblemCategory>(
            r#"
            SELECT pc.problem_id, c.id, c.name, c.description, c.created_at
            FROM problem_categories pc
            JOIN categories c ON c.id = pc.category_id
            WHERE pc.problem_id = ANY($1)
            ORDER BY c.name
            "#,
        )
        .bind(problem_ids)
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    /// `(problem_id, solution count)` for the given problems that have solutions
    pub async fn solution_counts_for(pool: &PgPool, problem_ids: &[i64]) -> AppResult<Vec<(i64, i64)>> {
        let counts = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT problem_id, COUNT(*)
            FROM solutions
            WHERE problem_id = ANY($1)
            GROUP BY problem_id
            "#,
        )
        .bind(problem_ids)
        .fetch_all(pool)
        .await?;

        Ok(counts)
    }
}
