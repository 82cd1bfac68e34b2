//! Category handler implementations

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    handlers::extract::{ApiPath, ApiQuery, ValidatedJson},
    services::CategoryService,
    state::AppState,
};

use super::{
    request::{CreateCategoryRequest, GetCategoryQuery, ListCategoriesQuery, UpdateCategoryRequest},
    response::{CategoriesListResponse, CategoryDetailResponse, CategoryEnvelope, DeleteCategoryResponse},
};

/// List all categories
pub async fn list_categories(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListCategoriesQuery>,
) -> AppResult<Json<CategoriesListResponse>> {
    let categories = CategoryService::list_categories(state.db(), query.include_stats).await?;
    Ok(Json(categories))
}

/// Create a new category
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryEnvelope>)> {
    let category = CategoryService::create_category(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Get a category, optionally with a page of its problems
pub async fn get_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<GetCategoryQuery>,
) -> AppResult<Json<CategoryDetailResponse>> {
    let page = query
        .include_problems
        .then(|| state.config().pagination.page(query.page, query.limit));
    let category = CategoryService::get_category(state.db(), id, page).await?;
    Ok(Json(category))
}

/// Partially update a category
pub async fn update_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryRequest>,
) -> AppResult<Json<CategoryEnvelope>> {
    let category = CategoryService::update_category(state.db(), id, payload).await?;
    Ok(Json(category))
}

/// Delete a category that no problem is filed under
pub async fn delete_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<DeleteCategoryResponse>> {
    CategoryService::delete_category(state.db(), id).await?;
    Ok(Json(DeleteCategoryResponse {
        message: "Category deleted".to_string(),
    }))
}
