//! Tag handler implementations

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    handlers::extract::{ApiPath, ValidatedJson},
    services::TagService,
    state::AppState,
};

use super::{
    request::CreateTagRequest,
    response::{DeleteTagResponse, TagEnvelope, TagsListResponse},
};

/// List all tags
pub async fn list_tags(State(state): State<AppState>) -> AppResult<Json<TagsListResponse>> {
    let tags = TagService::list_tags(state.db()).await?;
    Ok(Json(TagsListResponse { tags }))
}

/// Create a new tag
pub async fn create_tag(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTagRequest>,
) -> AppResult<(StatusCode, Json<TagEnvelope>)> {
    let tag = TagService::create_tag(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(TagEnvelope { tag })))
}

/// Delete a tag and detach it from every problem
pub async fn delete_tag(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<DeleteTagResponse>> {
    TagService::delete_tag(state.db(), id).await?;
    Ok(Json(DeleteTagResponse {
        message: "Tag deleted".to_string(),
    }))
}
