//! Solution service

use sqlx::PgPool;

use crate::{
    db::repositories::SolutionRepository,
    error::{AppError, AppResult},
    handlers::solutions::{
        request::{CreateSolutionRequest, UpdateSolutionRequest},
        response::{LanguageCount, SolutionListStats, SolutionResponse, SolutionsListResponse},
    },
    models::{Language, Page, SolutionFilter, SolutionSort},
};

/// Solution service for business logic
pub struct SolutionService;

impl SolutionService {
    /// List solutions with their problems and per-language totals
    pub async fn list_solutions(
        pool: &PgPool,
        filter: &SolutionFilter,
        sort: SolutionSort,
        page: Page,
    ) -> AppResult<SolutionsListResponse> {
        let ((solutions, total), language_counts) = tokio::try_join!(
            SolutionRepository::list(pool, filter, sort, page),
            SolutionRepository::language_counts(pool),
        )?;

        let languages = language_counts
            .into_iter()
            .map(|(language, count)| {
                let language = language
                    .parse::<Language>()
                    .map_err(|e| AppError::Internal(e.into()))?;
                Ok(LanguageCount { language, count })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(SolutionsListResponse {
            solutions: solutions.into_iter().map(SolutionResponse::from).collect(),
            pagination: page.meta(total),
            stats: SolutionListStats { languages },
        })
    }

    /// Record a solution as the next attempt at its problem
    pub async fn create_solution(pool: &PgPool, payload: CreateSolutionRequest) -> AppResult<SolutionResponse> {
        let solution = SolutionRepository::create(pool, &payload.into_new_solution()).await?;

        tracing::info!(
            solution_id = solution.id,
            problem_id = solution.problem_id,
            attempt_no = solution.attempt_no,
            language = %solution.language,
            "Solution recorded"
        );

        Self::get_solution(pool, solution.id).await
    }

    /// Get solution by ID
    pub async fn get_solution(pool: &PgPool, id: i64) -> AppResult<SolutionResponse> {
        let solution = SolutionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solution not found".to_string()))?;

        Ok(solution.into())
    }

    /// Update solution
    pub async fn update_solution(
        pool: &PgPool,
        id: i64,
        payload: UpdateSolutionRequest,
    ) -> AppResult<SolutionResponse> {
        SolutionRepository::update(pool, id, &payload.into_changes())
            .await?
            .ok_or_else(|| AppError::NotFound("Solution not found".to_string()))?;

        tracing::debug!(solution_id = id, "Solution updated");

        Self::get_solution(pool, id).await
    }

    /// Delete solution; attempt numbers of the remaining solutions are kept
    pub async fn delete_solution(pool: &PgPool, id: i64) -> AppResult<()> {
        if !SolutionRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Solution not found".to_string()));
        }

        tracing::info!(solution_id = id, "Solution deleted");

        Ok(())
    }
}
