//! Statistics handlers

use axum::{extract::State, routing::get, Json, Router};

use crate::{error::AppResult, services::StatsService, state::AppState, stats::StatsSnapshot};

/// Current statistics snapshot
async fn get_statistics(State(state): State<AppState>) -> AppResult<Json<StatsSnapshot>> {
    let snapshot = StatsService::snapshot(state.db()).await?;
    Ok(Json(snapshot))
}

/// Statistics routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/statistics", get(get_statistics))
        .route("/stats", get(get_statistics))
}
