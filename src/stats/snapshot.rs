//! Statistics snapshot returned by the engine

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Difficulty, Language, SolutionStatus};

/// Full result of one statistics computation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub overview: Overview,
    pub difficulty: Vec<DifficultyCount>,
    pub languages: Vec<LanguageStat>,
    pub tags: Vec<TagPopularity>,
    pub status: Vec<StatusCount>,
    pub trends: Trends,
    pub performance: Performance,
    pub categories: Vec<CategoryPopularity>,
    pub recent_activity: Vec<RecentActivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_problems: i64,
    pub total_solutions: i64,
    pub unique_languages_count: i64,
    pub average_attempts: f64,
    pub starred_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultyCount {
    pub difficulty: Difficulty,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStat {
    pub language: Language,
    pub count: i64,
    pub avg_runtime: f64,
    pub avg_memory: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagPopularity {
    pub name: String,
    pub color: Option<String>,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPopularity {
    pub name: String,
    pub description: Option<String>,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: SolutionStatus,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trends {
    pub monthly: Vec<MonthlyTrend>,
    pub weekly: Vec<WeeklyTrend>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// `YYYY-MM`
    pub month: String,
    pub problems_solved: i64,
    pub solutions_added: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTrend {
    /// Monday of the week, `YYYY-MM-DD`
    pub week: String,
    pub problems_solved: i64,
    pub solutions_added: i64,
}

/// Runtime (ms) and memory (MB) extremes over fully measured solutions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub avg_runtime: f64,
    pub avg_memory: f64,
    pub min_runtime: f64,
    pub max_runtime: f64,
    pub min_memory: f64,
    pub max_memory: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: i64,
    pub language: Language,
    pub status: SolutionStatus,
    pub created_at: DateTime<Utc>,
    pub problem: ActivityProblemRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityProblemRef {
    pub lc_id: i32,
    pub title: String,
    pub difficulty: Difficulty,
}
