//! Tag model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Tag database model
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    /// Display hint only
    pub color: Option<String>,
}

/// Tag attached to a specific problem, as returned by batched lookups
#[derive(Debug, Clone, FromRow)]
pub struct ProblemTag {
    pub problem_id: i64,
    #[sqlx(flatten)]
    pub tag: Tag,
}
