//! Problem response DTOs

use serde::Serialize;

use crate::models::{Category, PageMeta, Problem, Solution, Tag};

/// Problem with its groupings and solution count
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResponse {
    #[serde(flatten)]
    pub problem: Problem,
    pub tags: Vec<Tag>,
    pub categories: Vec<Category>,
    pub solution_count: i64,
}

/// Problem detail with its latest solutions
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetailResponse {
    #[serde(flatten)]
    pub problem: ProblemResponse,
    /// Newest first
    pub solutions: Vec<Solution>,
}

/// Problem list response
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<ProblemResponse>,
    pub pagination: PageMeta,
}

/// Problem delete response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProblemResponse {
    pub message: String,
    pub deleted_solutions: i64,
}
