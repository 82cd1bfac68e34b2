//! Problem request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_PROBLEM_DESCRIPTION_LENGTH, MAX_PROBLEM_TITLE_LENGTH},
    models::{Difficulty, NewProblem, ProblemChanges, ProblemFilter, TextSearch},
    utils::validation::{validate_clean_text, validate_id_list},
};

/// Create problem request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProblemRequest {
    /// LeetCode problem number
    #[validate(range(min = 1))]
    pub lc_id: i32,

    #[validate(
        length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH),
        custom(function = "validate_clean_text")
    )]
    pub title: String,

    pub difficulty: Difficulty,

    #[validate(url)]
    pub url: Option<String>,

    #[validate(length(max = MAX_PROBLEM_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_id_list"))]
    pub tag_ids: Vec<i64>,

    #[serde(default)]
    #[validate(custom(function = "validate_id_list"))]
    pub category_ids: Vec<i64>,
}

impl CreateProblemRequest {
    pub fn to_new_problem(&self) -> NewProblem {
        NewProblem {
            lc_id: self.lc_id,
            title: self.title.clone(),
            difficulty: self.difficulty,
            url: self.url.clone(),
            description: self.description.clone(),
        }
    }
}

/// Update problem request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProblemRequest {
    #[validate(range(min = 1))]
    pub lc_id: Option<i32>,

    #[validate(
        length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH),
        custom(function = "validate_clean_text")
    )]
    pub title: Option<String>,

    pub difficulty: Option<Difficulty>,

    #[validate(url)]
    pub url: Option<String>,

    #[validate(length(max = MAX_PROBLEM_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub starred: Option<bool>,

    /// Replaces the problem's tags when present
    #[validate(custom(function = "validate_id_list"))]
    pub tag_ids: Option<Vec<i64>>,

    /// Replaces the problem's categories when present
    #[validate(custom(function = "validate_id_list"))]
    pub category_ids: Option<Vec<i64>>,
}

impl UpdateProblemRequest {
    pub fn to_changes(&self) -> ProblemChanges {
        ProblemChanges {
            lc_id: self.lc_id,
            title: self.title.clone(),
            difficulty: self.difficulty,
            url: self.url.clone(),
            description: self.description.clone(),
            starred: self.starred,
        }
    }
}

/// List problems query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListProblemsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub difficulty: Option<Difficulty>,
    /// Matches title or description
    pub search: Option<String>,
    pub starred: Option<bool>,
}

impl ListProblemsQuery {
    pub fn filter(&self) -> ProblemFilter {
        ProblemFilter {
            difficulty: self.difficulty,
            search: self.search.as_deref().and_then(TextSearch::new),
            starred: self.starred,
        }
    }
}
