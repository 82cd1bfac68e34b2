//! Tag handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Tag routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_tags))
        .route("/", post(handler::create_tag))
        .route("/{id}", delete(handler::delete_tag))
}
