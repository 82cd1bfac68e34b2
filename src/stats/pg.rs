//! PostgreSQL statistics store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::{
    store::{
        AssociationCount, AssociationKind, CountTarget, GroupCount, GroupField, LanguageMetrics,
        MetricSummary, MetricsScope, RecentSolution, StatsStore, TimeBucket,
    },
    trend::TruncateUnit,
};
use crate::error::AppResult;

/// Aggregate queries run directly against the pool
#[derive(Debug, Clone)]
pub struct PgStatsStore {
    pool: PgPool,
}

impl PgStatsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsStore for PgStatsStore {
    async fn count(&self, target: CountTarget) -> AppResult<i64> {
        let sql = match target {
            CountTarget::Problems => "SELECT COUNT(*) FROM problems",
            CountTarget::StarredProblems => "SELECT COUNT(*) FROM problems WHERE starred",
            CountTarget::Solutions => "SELECT COUNT(*) FROM solutions",
        };

        let count = sqlx::query_scalar::<_, i64>(sql).fetch_one(&self.pool).await?;

        Ok(count)
    }

    async fn count_grouped_by(&self, field: GroupField) -> AppResult<Vec<GroupCount>> {
        let sql = match field {
            GroupField::Difficulty => {
                "SELECT difficulty AS key, COUNT(*) AS count FROM problems GROUP BY difficulty"
            }
            GroupField::Status => {
                "SELECT status AS key, COUNT(*) AS count FROM solutions GROUP BY status"
            }
        };

        let groups = sqlx::query_as::<_, GroupCount>(sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(groups)
    }

    async fn language_metrics(&self) -> AppResult<Vec<LanguageMetrics>> {
        let metrics = sqlx::query_as::<_, LanguageMetrics>(
            r#"
            SELECT
                language,
                COUNT(*) AS count,
                AVG(runtime)::float8 AS avg_runtime,
                AVG(memory)::float8 AS avg_memory
            FROM solutions
            GROUP BY language
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(metrics)
    }

    async fn solution_metrics(&self, scope: MetricsScope) -> AppResult<MetricSummary> {
        let filter = match scope {
            MetricsScope::All => "",
            MetricsScope::WithRuntimeAndMemory => {
                "WHERE runtime IS NOT NULL AND memory IS NOT NULL"
            }
        };

        let summary = sqlx::query_as::<_, MetricSummary>(&format!(
            r#"
            SELECT
                AVG(attempt_no)::float8 AS avg_attempt_no,
                AVG(runtime)::float8 AS avg_runtime,
                MIN(runtime)::float8 AS min_runtime,
                MAX(runtime)::float8 AS max_runtime,
                AVG(memory)::float8 AS avg_memory,
                MIN(memory)::float8 AS min_memory,
                MAX(memory)::float8 AS max_memory
            FROM solutions
            {filter}
            "#
        ))
        .fetch_one(&self.pool)
        .await?;

        Ok(summary)
    }

    async fn association_counts(&self, kind: AssociationKind) -> AppResult<Vec<AssociationCount>> {
        let sql = match kind {
            AssociationKind::Tags => {
                r#"
                SELECT t.name, t.color AS detail, COUNT(pt.problem_id) AS count
                FROM tags t
                LEFT JOIN problem_tags pt ON pt.tag_id = t.id
                GROUP BY t.id, t.name, t.color
                "#
            }
            AssociationKind::Categories => {
                r#"
                SELECT c.name, c.description AS detail, COUNT(pc.problem_id) AS count
                FROM categories c
                LEFT JOIN problem_categories pc ON pc.category_id = c.id
                GROUP BY c.id, c.name, c.description
                "#
            }
        };

        let counts = sqlx::query_as::<_, AssociationCount>(sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(counts)
    }

    async fn bucket_by_time_truncation(
        &self,
        unit: TruncateUnit,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<TimeBucket>> {
        let buckets = sqlx::query_as::<_, TimeBucket>(&format!(
            r#"
            SELECT
                DATE_TRUNC('{field}', created_at AT TIME ZONE 'UTC')::date AS bucket,
                COUNT(DISTINCT problem_id) AS distinct_problems,
                COUNT(*) AS total
            FROM solutions
            WHERE created_at >= $1
            GROUP BY 1
            ORDER BY 1
            "#,
            field = unit.sql_field()
        ))
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(buckets)
    }

    async fn recent_solutions(&self, limit: i64) -> AppResult<Vec<RecentSolution>> {
        let solutions = sqlx::query_as::<_, RecentSolution>(
            r#"
            SELECT s.id, s.language, s.status, s.created_at, p.lc_id, p.title, p.difficulty
            FROM solutions s
            JOIN problems p ON p.id = s.problem_id
            ORDER BY s.created_at DESC, s.id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(solutions)
    }
}
