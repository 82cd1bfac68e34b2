//! Category response DTOs

use serde::Serialize;

use crate::{
    handlers::problems::ProblemResponse,
    models::{Category, CategoryProgress, PageMeta},
};

/// Progress counters of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub problems_count: i64,
    pub solved_count: i64,
    pub total_solutions: i64,
    /// Whole percentage of problems with at least one solution
    pub completion_rate: i64,
}

impl From<CategoryProgress> for CategoryStats {
    fn from(progress: CategoryProgress) -> Self {
        Self {
            problems_count: progress.problems_count,
            solved_count: progress.solved_count,
            total_solutions: progress.total_solutions,
            completion_rate: progress.completion_rate(),
        }
    }
}

/// Category, optionally with its progress counters
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    #[serde(flatten)]
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<CategoryStats>,
}

/// Single category envelope
#[derive(Debug, Serialize)]
pub struct CategoryEnvelope {
    pub category: CategoryResponse,
}

/// Category list response
#[derive(Debug, Serialize)]
pub struct CategoriesListResponse {
    pub categories: Vec<CategoryResponse>,
}

/// Category detail, with a page of problems when requested
#[derive(Debug, Serialize)]
pub struct CategoryDetailResponse {
    pub category: CategoryResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problems: Option<Vec<ProblemResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
}

/// Category delete response
#[derive(Debug, Serialize)]
pub struct DeleteCategoryResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_carry_completion_rate() {
        let stats = CategoryStats::from(CategoryProgress {
            problems_count: 3,
            solved_count: 2,
            total_solutions: 5,
        });
        assert_eq!(stats.completion_rate, 67);

        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["problemsCount"], 3);
        assert_eq!(json["completionRate"], 67);
    }
}
