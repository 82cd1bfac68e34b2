//! Category model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Category database model
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Per-category progress counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    /// Problems filed under the category
    pub problems_count: i64,
    /// Problems with at least one recorded solution
    pub solved_count: i64,
    /// Solutions across all of the category's problems
    pub total_solutions: i64,
}

impl CategoryProgress {
    /// Share of solved problems as a whole percentage, 0 for an empty category
    pub fn completion_rate(&self) -> i64 {
        if self.problems_count == 0 {
            return 0;
        }
        (self.solved_count as f64 / self.problems_count as f64 * 100.0).round() as i64
    }
}

/// Category joined with its progress counters
#[derive(Debug, Clone, FromRow)]
pub struct CategoryWithProgress {
    #[sqlx(flatten)]
    pub category: Category,
    #[sqlx(flatten)]
    pub progress: CategoryProgress,
}

/// Category attached to a specific problem, as returned by batched lookups
#[derive(Debug, Clone, FromRow)]
pub struct ProblemCategory {
    pub problem_id: i64,
    #[sqlx(flatten)]
    pub category: Category,
}
