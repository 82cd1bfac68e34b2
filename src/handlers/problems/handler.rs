//! Problem handler implementations

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    handlers::extract::{ApiPath, ApiQuery, ValidatedJson},
    services::ProblemService,
    state::AppState,
};

use super::{
    request::{CreateProblemRequest, ListProblemsQuery, UpdateProblemRequest},
    response::{DeleteProblemResponse, ProblemDetailResponse, ProblemResponse, ProblemsListResponse},
};

/// List problems (paginated, newest first)
pub async fn list_problems(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    let page = state.config().pagination.page(query.page, query.limit);
    let problems = ProblemService::list_problems(state.db(), &query.filter(), page).await?;
    Ok(Json(problems))
}

/// Create a new problem
pub async fn create_problem(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<ProblemResponse>)> {
    let problem = ProblemService::create_problem(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(problem)))
}

/// Get a problem with its latest solutions
pub async fn get_problem(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<ProblemDetailResponse>> {
    let problem = ProblemService::get_problem(state.db(), id).await?;
    Ok(Json(problem))
}

/// Partially update a problem
pub async fn update_problem(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateProblemRequest>,
) -> AppResult<Json<ProblemResponse>> {
    let problem = ProblemService::update_problem(state.db(), id, payload).await?;
    Ok(Json(problem))
}

/// Delete a problem and its solutions
pub async fn delete_problem(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<DeleteProblemResponse>> {
    let deleted = ProblemService::delete_problem(state.db(), id).await?;
    Ok(Json(deleted))
}
