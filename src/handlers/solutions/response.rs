//! Solution response DTOs

use serde::Serialize;

use crate::models::{Language, PageMeta, ProblemRef, Solution, SolutionWithProblem};

/// Solution with the problem it belongs to
#[derive(Debug, Serialize)]
pub struct SolutionResponse {
    #[serde(flatten)]
    pub solution: Solution,
    pub problem: ProblemRef,
}

impl From<SolutionWithProblem> for SolutionResponse {
    fn from(row: SolutionWithProblem) -> Self {
        let problem = row.problem();
        Self {
            solution: row.solution,
            problem,
        }
    }
}

/// Solution count of one language
#[derive(Debug, Serialize)]
pub struct LanguageCount {
    pub language: Language,
    pub count: i64,
}

/// Aggregate figures shown beside a solution listing
#[derive(Debug, Serialize)]
pub struct SolutionListStats {
    /// Over all solutions, most used first
    pub languages: Vec<LanguageCount>,
}

/// Solution list response
#[derive(Debug, Serialize)]
pub struct SolutionsListResponse {
    pub solutions: Vec<SolutionResponse>,
    pub pagination: PageMeta,
    pub stats: SolutionListStats,
}

/// Solution delete response
#[derive(Debug, Serialize)]
pub struct DeleteSolutionResponse {
    pub message: String,
}
