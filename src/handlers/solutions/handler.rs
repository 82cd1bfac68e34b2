//! Solution handler implementations

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    handlers::extract::{ApiPath, ApiQuery, ValidatedJson},
    services::SolutionService,
    state::AppState,
};

use super::{
    request::{CreateSolutionRequest, ListSolutionsQuery, UpdateSolutionRequest},
    response::{DeleteSolutionResponse, SolutionResponse, SolutionsListResponse},
};

/// List solutions (filtered, sorted, paginated)
pub async fn list_solutions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListSolutionsQuery>,
) -> AppResult<Json<SolutionsListResponse>> {
    let page = state.config().pagination.page(query.page, query.limit);
    let solutions =
        SolutionService::list_solutions(state.db(), &query.filter()?, query.sort(), page).await?;
    Ok(Json(solutions))
}

/// Record a new solution
pub async fn create_solution(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSolutionRequest>,
) -> AppResult<(StatusCode, Json<SolutionResponse>)> {
    let solution = SolutionService::create_solution(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(solution)))
}

/// Get a specific solution
pub async fn get_solution(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<SolutionResponse>> {
    let solution = SolutionService::get_solution(state.db(), id).await?;
    Ok(Json(solution))
}

/// Partially update a solution
pub async fn update_solution(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateSolutionRequest>,
) -> AppResult<Json<SolutionResponse>> {
    let solution = SolutionService::update_solution(state.db(), id, payload).await?;
    Ok(Json(solution))
}

/// Delete a solution
pub async fn delete_solution(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<DeleteSolutionResponse>> {
    SolutionService::delete_solution(state.db(), id).await?;
    Ok(Json(DeleteSolutionResponse {
        message: "Solution deleted".to_string(),
    }))
}
