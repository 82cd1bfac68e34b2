//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod categories;
pub mod extract;
pub mod health;
pub mod problems;
pub mod solutions;
pub mod statistics;
pub mod tags;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(statistics::routes())
        .nest("/problems", problems::routes())
        .nest("/solutions", solutions::routes())
        .nest("/categories", categories::routes())
        .nest("/tags", tags::routes())
}
