//! Query capabilities the statistics engine needs from a store
//!
//! Implementations answer small, aggregate-shaped questions. Ordering,
//! truncation, rounding and defaulting all happen in the engine, so an
//! implementation may return rows in any order.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use super::trend::TruncateUnit;
use crate::{
    error::AppResult,
    models::{Difficulty, Language, SolutionStatus},
};

/// Row sets that can be counted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountTarget {
    Problems,
    StarredProblems,
    Solutions,
}

/// Columns that can be grouped and counted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    /// `problems.difficulty`
    Difficulty,
    /// `solutions.status`
    Status,
}

/// One group of a grouped count, keyed by the stored value
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct GroupCount {
    pub key: String,
    pub count: i64,
}

/// Solution count and metric averages for one language
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct LanguageMetrics {
    pub language: String,
    pub count: i64,
    /// Average over solutions with a runtime, `None` when there are none
    pub avg_runtime: Option<f64>,
    /// Average over solutions with a memory figure, `None` when there are none
    pub avg_memory: Option<f64>,
}

/// Which solutions an aggregate covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsScope {
    All,
    /// Only solutions where both runtime and memory are recorded
    WithRuntimeAndMemory,
}

/// Averages and extremes over a set of solutions; `None` for an empty set
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct MetricSummary {
    pub avg_attempt_no: Option<f64>,
    pub avg_runtime: Option<f64>,
    pub min_runtime: Option<f64>,
    pub max_runtime: Option<f64>,
    pub avg_memory: Option<f64>,
    pub min_memory: Option<f64>,
    pub max_memory: Option<f64>,
}

/// Groupings associated with problems through a join table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    Tags,
    Categories,
}

/// A tag or category with the number of problems it is attached to
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AssociationCount {
    pub name: String,
    /// Tag color or category description
    pub detail: Option<String>,
    pub count: i64,
}

/// Solutions created within one truncated time bucket
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TimeBucket {
    /// First day of the bucket
    pub bucket: NaiveDate,
    pub distinct_problems: i64,
    pub total: i64,
}

/// Parent problem fields shown in recent activity
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ActivityProblem {
    pub lc_id: i32,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub difficulty: Difficulty,
}

/// A recently created solution
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RecentSolution {
    pub id: i64,
    #[sqlx(try_from = "String")]
    pub language: Language,
    #[sqlx(try_from = "String")]
    pub status: SolutionStatus,
    pub created_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub problem: ActivityProblem,
}

/// Read-only aggregate queries over problems, solutions, tags and categories
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsStore: Send + Sync {
    /// Count the rows of a target set
    async fn count(&self, target: CountTarget) -> AppResult<i64>;

    /// Count rows per distinct value of a column; only present values appear
    async fn count_grouped_by(&self, field: GroupField) -> AppResult<Vec<GroupCount>>;

    /// Per-language solution counts with null-safe metric averages
    async fn language_metrics(&self) -> AppResult<Vec<LanguageMetrics>>;

    /// Averages and extremes over the solutions in `scope`
    async fn solution_metrics(&self, scope: MetricsScope) -> AppResult<MetricSummary>;

    /// Every tag or category with its problem count, zero counts included
    async fn association_counts(&self, kind: AssociationKind) -> AppResult<Vec<AssociationCount>>;

    /// Solutions created at or after `since`, grouped by truncated creation
    /// time; buckets without solutions are absent
    async fn bucket_by_time_truncation(
        &self,
        unit: TruncateUnit,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<TimeBucket>>;

    /// The `limit` newest solutions, newest first
    async fn recent_solutions(&self, limit: i64) -> AppResult<Vec<RecentSolution>>;
}
