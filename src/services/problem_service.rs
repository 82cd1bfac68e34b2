//! Problem service

use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    constants::PROBLEM_DETAIL_RECENT_SOLUTIONS,
    db::repositories::{ProblemRepository, SolutionRepository},
    error::{AppError, AppResult},
    handlers::problems::{
        request::{CreateProblemRequest, UpdateProblemRequest},
        response::{DeleteProblemResponse, ProblemDetailResponse, ProblemResponse, ProblemsListResponse},
    },
    models::{Page, Problem, ProblemFilter},
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// List problems with their groupings
    pub async fn list_problems(pool: &PgPool, filter: &ProblemFilter, page: Page) -> AppResult<ProblemsListResponse> {
        let (problems, total) = ProblemRepository::list(pool, filter, page).await?;

        Ok(ProblemsListResponse {
            problems: Self::with_associations(pool, problems).await?,
            pagination: page.meta(total),
        })
    }

    /// Create a new problem
    pub async fn create_problem(pool: &PgPool, payload: CreateProblemRequest) -> AppResult<ProblemResponse> {
        Self::ensure_lc_id_free(pool, payload.lc_id, None).await?;

        let problem = ProblemRepository::create(
            pool,
            &payload.to_new_problem(),
            &payload.tag_ids,
            &payload.category_ids,
        )
        .await?;

        tracing::info!(problem_id = problem.id, lc_id = problem.lc_id, "Problem created");

        Self::to_problem_response(pool, problem).await
    }

    /// Get problem by ID with its latest solutions
    pub async fn get_problem(pool: &PgPool, id: i64) -> AppResult<ProblemDetailResponse> {
        let problem = ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        let solutions =
            SolutionRepository::recent_for_problem(pool, id, PROBLEM_DETAIL_RECENT_SOLUTIONS).await?;

        Ok(ProblemDetailResponse {
            problem: Self::to_problem_response(pool, problem).await?,
            solutions,
        })
    }

    /// Update problem
    pub async fn update_problem(
        pool: &PgPool,
        id: i64,
        payload: UpdateProblemRequest,
    ) -> AppResult<ProblemResponse> {
        if let Some(lc_id) = payload.lc_id {
            Self::ensure_lc_id_free(pool, lc_id, Some(id)).await?;
        }

        let updated = ProblemRepository::update(
            pool,
            id,
            &payload.to_changes(),
            payload.tag_ids.as_deref(),
            payload.category_ids.as_deref(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        tracing::info!(problem_id = id, "Problem updated");

        Self::to_problem_response(pool, updated).await
    }

    /// Delete problem together with its solutions
    pub async fn delete_problem(pool: &PgPool, id: i64) -> AppResult<DeleteProblemResponse> {
        let deleted_solutions = ProblemRepository::delete(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        tracing::info!(problem_id = id, deleted_solutions, "Problem deleted");

        Ok(DeleteProblemResponse {
            message: "Problem deleted".to_string(),
            deleted_solutions,
        })
    }

    /// Reject a LeetCode number already used by a problem other than `own_id`
    async fn ensure_lc_id_free(pool: &PgPool, lc_id: i32, own_id: Option<i64>) -> AppResult<()> {
        match ProblemRepository::find_by_lc_id(pool, lc_id).await? {
            Some(existing) if Some(existing.id) != own_id => Err(AppError::Conflict(format!(
                "Problem with LeetCode id {lc_id} already exists"
            ))),
            _ => Ok(()),
        }
    }

    async fn to_problem_response(pool: &PgPool, problem: Problem) -> AppResult<ProblemResponse> {
        let mut responses = Self::with_associations(pool, vec![problem]).await?;
        responses
            .pop()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("problem lost while loading associations")))
    }

    /// Attach tags, categories and solution counts with one query each
    pub async fn with_associations(pool: &PgPool, problems: Vec<Problem>) -> AppResult<Vec<ProblemResponse>> {
        let ids: Vec<i64> = problems.iter().map(|p| p.id).collect();

        let (tags, categories, counts) = tokio::try_join!(
            ProblemRepository::tags_for(pool, &ids),
            ProblemRepository::categories_for(pool, &ids),
            ProblemRepository::solution_counts_for(pool, &ids),
        )?;

        let mut tags_by_problem: HashMap<i64, Vec<_>> = HashMap::new();
        for row in tags {
            tags_by_problem.entry(row.problem_id).or_default().push(row.tag);
        }
        let mut categories_by_problem: HashMap<i64, Vec<_>> = HashMap::new();
        for row in categories {
            categories_by_problem.entry(row.problem_id).or_default().push(row.category);
        }
        let counts: HashMap<i64, i64> = counts.into_iter().collect();

        Ok(problems
            .into_iter()
            .map(|problem| ProblemResponse {
                tags: tags_by_problem.remove(&problem.id).unwrap_or_default(),
                categories: categories_by_problem.remove(&problem.id).unwrap_or_default(),
                solution_count: counts.get(&problem.id).copied().unwrap_or(0),
                problem,
            })
            .collect())
    }
}
