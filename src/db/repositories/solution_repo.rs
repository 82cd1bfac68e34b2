//! Solution repository

use sqlx::PgPool;

use crate::{
    error::{AppError, AppResult},
    models::{
        NewSolution, Page, Solution, SolutionChanges, SolutionFilter, SolutionSort,
        SolutionWithProblem, TextSearch,
    },
};

/// Filter shared by the solution listing and its count
const SOLUTION_FILTER: &str = r#"
    ($1::text IS NULL OR s.language = $1)
    AND ($2::text IS NULL OR s.status = $2)
    AND ($3::bigint IS NULL OR s.problem_id = $3)
    AND ($4::text IS NULL OR p.title ILIKE $4 OR s.note ILIKE $4)
    AND ($5::timestamptz IS NULL OR s.created_at >= $5)
    AND ($6::timestamptz IS NULL OR s.created_at < $6)
"#;

/// Repository for solution database operations
pub struct SolutionRepository;

impl SolutionRepository {
    /// List solutions with their problems, filtered and sorted
    pub async fn list(
        pool: &PgPool,
        filter: &SolutionFilter,
        sort: SolutionSort,
        page: Page,
    ) -> AppResult<(Vec<SolutionWithProblem>, i64)> {
        let language = filter.language.map(|l| l.as_str());
        let status = filter.status.map(|s| s.as_str());
        let search_pattern = filter.search.as_ref().map(TextSearch::ilike_pattern);
        let created_from = filter.created.and_then(|range| range.from);
        let created_to = filter.created.and_then(|range| range.to);

        let solutions = sqlx::query_as::<_, SolutionWithProblem>(&format!(
            r#"
            SELECT
                s.*,
                p.lc_id AS problem_lc_id,
                p.title AS problem_title,
                p.difficulty AS problem_difficulty
            FROM solutions s
            JOIN problems p ON p.id = s.problem_id
            WHERE {SOLUTION_FILTER}
            ORDER BY {order_by}
            OFFSET $7 LIMIT $8
            "#,
            order_by = sort.order_by()
        ))
        .bind(language)
        .bind(status)
        .bind(filter.problem_id)
        .bind(&search_pattern)
        .bind(created_from)
        .bind(created_to)
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(&format!(
            r#"
            SELECT COUNT(*)
            FROM solutions s
            JOIN problems p ON p.id = s.problem_id
            WHERE {SOLUTION_FILTER}
            "#
        ))
        .bind(language)
        .bind(status)
        .bind(filter.problem_id)
        .bind(&search_pattern)
        .bind(created_from)
        .bind(created_to)
        .fetch_one(pool)
        .await?;

        Ok((solutions, count))
    }

    /// Find solution by ID, with its problem
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<SolutionWithProblem>> {
        let solution = sqlx::query_as::<_, SolutionWithProblem>(
            r#"
            SELECT
                s.*,
                p.lc_id AS problem_lc_id,
                p.title AS problem_title,
                p.difficulty AS problem_difficulty
            FROM solutions s
            JOIN problems p ON p.id = s.problem_id
            WHERE s.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(solution)
    }

    /// Record a solution under the next attempt number of its problem.
    ///
    /// The number comes from a per-problem counter that only ever grows, so
    /// numbers of deleted solutions are never handed out again. Bumping the
    /// counter locks the problem row until the insert commits.
    pub async fn create(pool: &PgPool, new: &NewSolution) -> AppResult<Solution> {
        let mut tx = pool.begin().await?;

        let attempt_no: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE problems
            SET attempts_issued = attempts_issued + 1
            WHERE id = $1
            RETURNING attempts_issued
            "#,
        )
        .bind(new.problem_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(attempt_no) = attempt_no else {
            return Err(AppError::InvalidReference(format!(
                "Problem {} does not exist",
                new.problem_id
            )));
        };

        let solution = sqlx::query_as::<_, Solution>(
            r#"
            INSERT INTO solutions (
                problem_id, code, language, complexity, runtime, memory, note,
                attempt_no, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(new.problem_id)
        .bind(&new.code)
        .bind(new.language.as_str())
        .bind(&new.complexity)
        .bind(new.runtime)
        .bind(new.memory)
        .bind(&new.note)
        .bind(attempt_no)
        .bind(new.status.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(solution)
    }

    /// Apply a partial update; the problem and attempt number never change.
    /// Returns `None` when the solution does not exist.
    pub async fn update(pool: &PgPool, id: i64, changes: &SolutionChanges) -> AppResult<Option<Solution>> {
        let solution = sqlx::query_as::<_, Solution>(
            r#"
            UPDATE solutions
            SET
                code = COALESCE($2, code),
                language = COALESCE($3, language),
                complexity = COALESCE($4, complexity),
                runtime = COALESCE($5, runtime),
                memory = COALESCE($6, memory),
                note = COALESCE($7, note),
                status = COALESCE($8, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.code)
        .bind(changes.language.map(|l| l.as_str()))
        .bind(&changes.complexity)
        .bind(changes.runtime)
        .bind(changes.memory)
        .bind(&changes.note)
        .bind(changes.status.map(|s| s.as_str()))
        .fetch_optional(pool)
        .await?;

        Ok(solution)
    }

    /// Delete solution; returns whether a row was removed
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM solutions WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// The `limit` newest solutions of a problem
    pub async fn recent_for_problem(pool: &PgPool, problem_id: i64, limit: i64) -> AppResult<Vec<Solution>> {
        let solutions = sqlx::query_as::<_, Solution>(
            r#"
            SELECT * FROM solutions
            WHERE problem_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(problem_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(solutions)
    }

    /// Count solutions recorded for a problem
    pub async fn count_for_problem(pool: &PgPool, problem_id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM solutions WHERE problem_id = $1"#)
            .bind(problem_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// `(language, count)` over all solutions, most used first
    pub async fn language_counts(pool: &PgPool) -> AppResult<Vec<(String, i64)>> {
        let counts = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT language, COUNT(*) AS count
            FROM solutions
            GROUP BY language
            ORDER BY count DESC, language
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::repositories::ProblemRepository,
        models::{Difficulty, Language},
        test_utils::{new_problem, new_solution, test_database},
    };

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_attempts_are_numbered_per_problem() {
        let db = test_database().await;
        let problem = ProblemRepository::create(&db.pool, &new_problem(1, Difficulty::Easy), &[], &[])
            .await
            .unwrap();
        let other = ProblemRepository::create(&db.pool, &new_problem(2, Difficulty::Hard), &[], &[])
            .await
            .unwrap();

        let mut attempts = Vec::new();
        for language in [Language::Python, Language::Rust, Language::Go] {
            let solution = SolutionRepository::create(&db.pool, &new_solution(problem.id, language))
                .await
                .unwrap();
            attempts.push(solution.attempt_no);
        }
        assert_eq!(attempts, vec![1, 2, 3]);

        let first_of_other = SolutionRepository::create(&db.pool, &new_solution(other.id, Language::Java))
            .await
            .unwrap();
        assert_eq!(first_of_other.attempt_no, 1);
        assert_eq!(SolutionRepository::count_for_problem(&db.pool, problem.id).await.unwrap(), 3);
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_deleted_attempt_numbers_are_not_reused() {
        let db = test_database().await;
        let problem = ProblemRepository::create(&db.pool, &new_problem(5, Difficulty::Medium), &[], &[])
            .await
            .unwrap();
        let mut ids = Vec::new();
        for _ in 0..3 {
            let solution = SolutionRepository::create(&db.pool, &new_solution(problem.id, Language::Rust))
                .await
                .unwrap();
            ids.push(solution.id);
        }

        // Deleting the newest attempt does not free its number
        assert!(SolutionRepository::delete(&db.pool, ids[2]).await.unwrap());
        let next = SolutionRepository::create(&db.pool, &new_solution(problem.id, Language::Rust))
            .await
            .unwrap();
        assert_eq!(next.attempt_no, 4);

        assert!(SolutionRepository::delete(&db.pool, ids[1]).await.unwrap());
        let after_gap = SolutionRepository::create(&db.pool, &new_solution(problem.id, Language::Rust))
            .await
            .unwrap();
        assert_eq!(after_gap.attempt_no, 5);
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_solution_for_missing_problem_is_invalid_reference() {
        let db = test_database().await;

        let err = SolutionRepository::create(&db.pool, &new_solution(404, Language::Cpp))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidReference(_)));
    }
}
