//! Solution request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_COMPLEXITY_LENGTH, MAX_NOTE_LENGTH, MAX_SOLUTION_CODE_LENGTH},
    error::{AppError, AppResult},
    models::{
        DateRange, Language, NewSolution, SolutionChanges, SolutionFilter, SolutionSort,
        SolutionSortField, SolutionStatus, SortOrder, TextSearch,
    },
    utils::validation::validate_not_blank,
};

/// Record solution request. Any client-supplied attempt number is ignored.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSolutionRequest {
    #[validate(range(min = 1))]
    pub problem_id: i64,

    #[validate(
        length(min = 1, max = MAX_SOLUTION_CODE_LENGTH),
        custom(function = "validate_not_blank")
    )]
    pub code: String,

    pub language: Language,

    #[validate(length(max = MAX_COMPLEXITY_LENGTH))]
    pub complexity: Option<String>,

    /// Milliseconds
    #[validate(range(min = 0))]
    pub runtime: Option<i32>,

    /// Megabytes
    #[validate(range(min = 0.0))]
    pub memory: Option<f64>,

    #[validate(length(max = MAX_NOTE_LENGTH))]
    pub note: Option<String>,

    #[serde(default)]
    pub status: SolutionStatus,
}

impl CreateSolutionRequest {
    pub fn into_new_solution(self) -> NewSolution {
        NewSolution {
            problem_id: self.problem_id,
            code: self.code,
            language: self.language,
            complexity: self.complexity,
            runtime: self.runtime,
            memory: self.memory,
            note: self.note,
            status: self.status,
        }
    }
}

/// Update solution request; the problem and attempt number cannot change
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSolutionRequest {
    #[validate(
        length(min = 1, max = MAX_SOLUTION_CODE_LENGTH),
        custom(function = "validate_not_blank")
    )]
    pub code: Option<String>,

    pub language: Option<Language>,

    #[validate(length(max = MAX_COMPLEXITY_LENGTH))]
    pub complexity: Option<String>,

    #[validate(range(min = 0))]
    pub runtime: Option<i32>,

    #[validate(range(min = 0.0))]
    pub memory: Option<f64>,

    #[validate(length(max = MAX_NOTE_LENGTH))]
    pub note: Option<String>,

    pub status: Option<SolutionStatus>,
}

impl UpdateSolutionRequest {
    pub fn into_changes(self) -> SolutionChanges {
        SolutionChanges {
            code: self.code,
            language: self.language,
            complexity: self.complexity,
            runtime: self.runtime,
            memory: self.memory,
            note: self.note,
            status: self.status,
        }
    }
}

/// List solutions query parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSolutionsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub language: Option<Language>,
    pub status: Option<SolutionStatus>,
    pub problem_id: Option<i64>,
    /// Matches the problem title or the note
    pub search: Option<String>,
    /// Inclusive lower bound on creation time
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on creation time
    pub to: Option<DateTime<Utc>>,
    pub sort_by: Option<SolutionSortField>,
    pub sort_order: Option<SortOrder>,
}

impl ListSolutionsQuery {
    pub fn filter(&self) -> AppResult<SolutionFilter> {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from >= to {
                return Err(AppError::InvalidInput("`from` must be before `to`".to_string()));
            }
        }

        let created = DateRange {
            from: self.from,
            to: self.to,
        };

        Ok(SolutionFilter {
            language: self.language,
            status: self.status,
            problem_id: self.problem_id,
            search: self.search.as_deref().and_then(TextSearch::new),
            created: (!created.is_unbounded()).then_some(created),
        })
    }

    pub fn sort(&self) -> SolutionSort {
        SolutionSort {
            field: self.sort_by.unwrap_or_default(),
            order: self.sort_order.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_create_request_defaults_status_and_ignores_attempt_no() {
        let payload: CreateSolutionRequest = serde_json::from_value(serde_json::json!({
            "problemId": 7,
            "code": "fn main() {}",
            "language": "rust",
            "runtime": 12,
            "attemptNo": 99
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.status, SolutionStatus::Accepted);
        let new = payload.into_new_solution();
        assert_eq!(new.problem_id, 7);
        assert_eq!(new.runtime, Some(12));
    }

    #[test]
    fn test_negative_metrics_are_rejected() {
        let payload: CreateSolutionRequest = serde_json::from_value(serde_json::json!({
            "problemId": 1,
            "code": "x",
            "language": "go",
            "runtime": -1,
            "memory": -0.5
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("runtime"));
        assert!(errors.field_errors().contains_key("memory"));
    }

    #[test]
    fn test_query_builds_filter_and_sort() {
        let query = ListSolutionsQuery {
            language: Some(Language::Python),
            from: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            sort_by: Some(SolutionSortField::Runtime),
            ..Default::default()
        };

        let filter = query.filter().unwrap();
        assert_eq!(filter.language, Some(Language::Python));
        assert!(filter.created.is_some());
        assert_eq!(query.sort().field, SolutionSortField::Runtime);
        assert_eq!(query.sort().order, SortOrder::Desc);
    }

    #[test]
    fn test_query_rejects_inverted_range() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let query = ListSolutionsQuery {
            from: Some(at),
            to: Some(at),
            ..Default::default()
        };
        assert!(matches!(query.filter(), Err(AppError::InvalidInput(_))));
    }
}
