//! Statistics engine
//!
//! Turns the aggregate answers of a [`StatsStore`] into a [`StatsSnapshot`].
//! The engine owns ordering, truncation, rounding and defaulting, so every
//! store produces byte-identical snapshots for the same data.

use std::{cmp::Ordering, str::FromStr};

use chrono::{DateTime, Utc};
use tracing::instrument;

use super::{
    round2,
    snapshot::{
        ActivityProblemRef, CategoryPopularity, DifficultyCount, LanguageStat, MonthlyTrend,
        Overview, Performance, RecentActivity, StatsSnapshot, StatusCount, TagPopularity, Trends,
        WeeklyTrend,
    },
    store::{
        AssociationCount, AssociationKind, CountTarget, GroupCount, GroupField, MetricSummary,
        MetricsScope, StatsStore, TimeBucket,
    },
    trend::TruncateUnit,
};
use crate::{
    constants::statistics::{RECENT_ACTIVITY, TOP_TAGS},
    error::{AppError, AppResult},
    models::{Difficulty, Language, ParseEnumError, SolutionStatus},
};

/// Computes statistics snapshots from a store; holds no cache
pub struct StatisticsEngine<S> {
    store: S,
}

impl<S: StatsStore> StatisticsEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Compute a snapshot of the store as it is now
    pub async fn compute_statistics(&self) -> AppResult<StatsSnapshot> {
        self.compute_statistics_at(Utc::now()).await
    }

    /// Compute a snapshot with trend windows ending at `now`.
    ///
    /// All sub-queries run concurrently; the first failure fails the call.
    #[instrument(skip(self))]
    pub async fn compute_statistics_at(&self, now: DateTime<Utc>) -> AppResult<StatsSnapshot> {
        let store = &self.store;
        let month_since = TruncateUnit::Month.window_start(now);
        let week_since = TruncateUnit::Week.window_start(now);

        let (
            total_problems,
            starred_count,
            total_solutions,
            difficulty_groups,
            status_groups,
            language_metrics,
            attempt_metrics,
            measured_metrics,
            tag_counts,
            category_counts,
            monthly_buckets,
            weekly_buckets,
            recent,
        ) = tokio::try_join!(
            store.count(CountTarget::Problems),
            store.count(CountTarget::StarredProblems),
            store.count(CountTarget::Solutions),
            store.count_grouped_by(GroupField::Difficulty),
            store.count_grouped_by(GroupField::Status),
            store.language_metrics(),
            store.solution_metrics(MetricsScope::All),
            store.solution_metrics(MetricsScope::WithRuntimeAndMemory),
            store.association_counts(AssociationKind::Tags),
            store.association_counts(AssociationKind::Categories),
            store.bucket_by_time_truncation(TruncateUnit::Month, month_since),
            store.bucket_by_time_truncation(TruncateUnit::Week, week_since),
            store.recent_solutions(RECENT_ACTIVITY),
        )?;

        let overview = Overview {
            total_problems,
            total_solutions,
            unique_languages_count: language_metrics.len() as i64,
            average_attempts: attempt_metrics.avg_attempt_no.map(round2).unwrap_or(0.0),
            starred_count,
        };

        let mut difficulty = parse_groups::<Difficulty>(difficulty_groups)?
            .into_iter()
            .map(|(difficulty, count)| DifficultyCount { difficulty, count })
            .collect::<Vec<_>>();
        difficulty.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then(b.difficulty.rank().cmp(&a.difficulty.rank()))
        });

        let mut status = parse_groups::<SolutionStatus>(status_groups)?
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect::<Vec<_>>();
        status.sort_by(|a, b| by_count_then_name(a.count, b.count, a.status.as_str(), b.status.as_str()));

        let mut languages = language_metrics
            .into_iter()
            .map(|row| {
                Ok(LanguageStat {
                    language: parse_key::<Language>(&row.language)?,
                    count: row.count,
                    avg_runtime: row.avg_runtime.map(round2).unwrap_or(0.0),
                    avg_memory: row.avg_memory.map(round2).unwrap_or(0.0),
                })
            })
            .collect::<AppResult<Vec<_>>>()?;
        languages.sort_by(|a, b| {
            by_count_then_name(a.count, b.count, a.language.as_str(), b.language.as_str())
        });

        let tags = ranked(tag_counts)
            .into_iter()
            .take(TOP_TAGS)
            .map(|row| TagPopularity {
                name: row.name,
                color: row.detail,
                count: row.count,
            })
            .collect();

        let categories = ranked(category_counts)
            .into_iter()
            .map(|row| CategoryPopularity {
                name: row.name,
                description: row.detail,
                count: row.count,
            })
            .collect();

        let trends = Trends {
            monthly: sorted_buckets(monthly_buckets)
                .into_iter()
                .map(|b| MonthlyTrend {
                    month: TruncateUnit::Month.format_key(b.bucket),
                    problems_solved: b.distinct_problems,
                    solutions_added: b.total,
                })
                .collect(),
            weekly: sorted_buckets(weekly_buckets)
                .into_iter()
                .map(|b| WeeklyTrend {
                    week: TruncateUnit::Week.format_key(b.bucket),
                    problems_solved: b.distinct_problems,
                    solutions_added: b.total,
                })
                .collect(),
        };

        let mut recent = recent;
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        let recent_activity = recent
            .into_iter()
            .take(RECENT_ACTIVITY as usize)
            .map(|s| RecentActivity {
                id: s.id,
                language: s.language,
                status: s.status,
                created_at: s.created_at,
                problem: ActivityProblemRef {
                    lc_id: s.problem.lc_id,
                    title: s.problem.title,
                    difficulty: s.problem.difficulty,
                },
            })
            .collect();

        let snapshot = StatsSnapshot {
            overview,
            difficulty,
            languages,
            tags,
            status,
            trends,
            performance: performance(&measured_metrics),
            categories,
            recent_activity,
        };

        tracing::debug!(
            total_problems = snapshot.overview.total_problems,
            total_solutions = snapshot.overview.total_solutions,
            monthly_buckets = snapshot.trends.monthly.len(),
            weekly_buckets = snapshot.trends.weekly.len(),
            "Computed statistics snapshot"
        );

        Ok(snapshot)
    }
}

fn parse_key<T: FromStr<Err = ParseEnumError>>(key: &str) -> AppResult<T> {
    key.parse::<T>()
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("corrupt stored value")))
}

fn parse_groups<T: FromStr<Err = ParseEnumError>>(groups: Vec<GroupCount>) -> AppResult<Vec<(T, i64)>> {
    groups
        .into_iter()
        .map(|g| Ok((parse_key::<T>(&g.key)?, g.count)))
        .collect()
}

fn by_count_then_name(a_count: i64, b_count: i64, a_name: &str, b_name: &str) -> Ordering {
    b_count.cmp(&a_count).then_with(|| a_name.cmp(b_name))
}

fn ranked(mut rows: Vec<AssociationCount>) -> Vec<AssociationCount> {
    rows.sort_by(|a, b| by_count_then_name(a.count, b.count, &a.name, &b.name));
    rows
}

fn sorted_buckets(mut buckets: Vec<TimeBucket>) -> Vec<TimeBucket> {
    buckets.sort_by_key(|b| b.bucket);
    buckets
}

fn performance(measured: &MetricSummary) -> Performance {
    Performance {
        avg_runtime: measured.avg_runtime.map(round2).unwrap_or(0.0),
        avg_memory: measured.avg_memory.map(round2).unwrap_or(0.0),
        min_runtime: measured.min_runtime.unwrap_or(0.0),
        max_runtime: measured.max_runtime.unwrap_or(0.0),
        min_memory: measured.min_memory.map(round2).unwrap_or(0.0),
        max_memory: measured.max_memory.map(round2).unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::{
        models::{Category, Problem, Solution, Tag},
        stats::{memory::InMemoryStatsStore, store::MockStatsStore},
    };

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn problem(id: i64, difficulty: Difficulty) -> Problem {
        Problem {
            id,
            lc_id: id as i32,
            title: format!("Problem {id}"),
            difficulty,
            url: None,
            description: None,
            starred: false,
            created_at: now() - Duration::days(100),
            updated_at: now() - Duration::days(100),
        }
    }

    fn solution(id: i64, problem_id: i64, attempt_no: i32, created_at: DateTime<Utc>) -> Solution {
        Solution {
            id,
            problem_id,
            code: "pass".to_string(),
            language: Language::Python,
            complexity: None,
            runtime: None,
            memory: None,
            note: None,
            attempt_no,
            status: SolutionStatus::Accepted,
            created_at,
            updated_at: created_at,
        }
    }

    fn tag(id: i64, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
            color: None,
        }
    }

    /// One Easy problem without solutions, one Medium problem with two
    /// python solutions measuring 10ms and 20ms
    fn scenario() -> InMemoryStatsStore {
        let mut store = InMemoryStatsStore::new();
        store.insert_problem(problem(1, Difficulty::Easy));
        store.insert_problem(problem(2, Difficulty::Medium));

        let mut first = solution(1, 2, 1, now() - Duration::days(3));
        first.runtime = Some(10);
        let mut second = solution(2, 2, 2, now() - Duration::days(1));
        second.runtime = Some(20);
        store.insert_solution(first);
        store.insert_solution(second);
        store
    }

    #[tokio::test]
    async fn test_scenario_snapshot() {
        let engine = StatisticsEngine::new(scenario());
        let snapshot = engine.compute_statistics_at(now()).await.unwrap();

        assert_eq!(snapshot.overview.total_problems, 2);
        assert_eq!(snapshot.overview.total_solutions, 2);
        assert_eq!(snapshot.overview.unique_languages_count, 1);
        assert_eq!(snapshot.overview.average_attempts, 1.5);

        assert_eq!(
            snapshot.difficulty,
            vec![
                DifficultyCount { difficulty: Difficulty::Medium, count: 1 },
                DifficultyCount { difficulty: Difficulty::Easy, count: 1 },
            ]
        );
        assert_eq!(
            snapshot.languages,
            vec![LanguageStat {
                language: Language::Python,
                count: 2,
                avg_runtime: 15.0,
                avg_memory: 0.0,
            }]
        );

        // No solution carries both metrics
        assert_eq!(snapshot.performance, Performance::default());

        assert_eq!(snapshot.recent_activity.len(), 2);
        assert_eq!(snapshot.recent_activity[0].id, 2);
        assert_eq!(snapshot.recent_activity[0].problem.difficulty, Difficulty::Medium);
    }

    #[tokio::test]
    async fn test_distribution_sums_match_overview() {
        let mut store = scenario();
        store.insert_problem(problem(3, Difficulty::Hard));
        let mut rust = solution(3, 3, 1, now());
        rust.language = Language::Rust;
        rust.status = SolutionStatus::WrongAnswer;
        store.insert_solution(rust);

        let snapshot = StatisticsEngine::new(store).compute_statistics_at(now()).await.unwrap();

        let difficulty_sum: i64 = snapshot.difficulty.iter().map(|d| d.count).sum();
        let language_sum: i64 = snapshot.languages.iter().map(|l| l.count).sum();
        let status_sum: i64 = snapshot.status.iter().map(|s| s.count).sum();
        assert_eq!(difficulty_sum, snapshot.overview.total_problems);
        assert_eq!(language_sum, snapshot.overview.total_solutions);
        assert_eq!(status_sum, snapshot.overview.total_solutions);

        // Equal counts fall back to hardest first
        let order: Vec<_> = snapshot.difficulty.iter().map(|d| d.difficulty).collect();
        assert_eq!(order, vec![Difficulty::Hard, Difficulty::Medium, Difficulty::Easy]);
        assert_eq!(snapshot.languages[0].language, Language::Python);
        assert_eq!(snapshot.status[0].status, SolutionStatus::Accepted);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let engine = StatisticsEngine::new(scenario());
        let first = engine.compute_statistics_at(now()).await.unwrap();
        let second = engine.compute_statistics_at(now()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_store_defaults_to_zero() {
        let engine = StatisticsEngine::new(InMemoryStatsStore::new());
        let snapshot = engine.compute_statistics_at(now()).await.unwrap();

        assert_eq!(snapshot.overview.total_problems, 0);
        assert_eq!(snapshot.overview.average_attempts, 0.0);
        assert!(snapshot.difficulty.is_empty());
        assert!(snapshot.languages.is_empty());
        assert!(snapshot.trends.monthly.is_empty());
        assert!(snapshot.trends.weekly.is_empty());
        assert!(snapshot.recent_activity.is_empty());
        assert_eq!(snapshot.performance, Performance::default());
    }

    #[tokio::test]
    async fn test_performance_bounds_and_rounding() {
        let mut store = InMemoryStatsStore::new();
        store.insert_problem(problem(1, Difficulty::Easy));
        for (id, runtime, memory) in [(1, 4, 40.123), (2, 9, 41.0), (3, 11, 42.456)] {
            let mut s = solution(id, 1, id as i32, now());
            s.runtime = Some(runtime);
            s.memory = Some(memory);
            store.insert_solution(s);
        }
        // Runtime without memory does not count toward performance
        let mut partial = solution(4, 1, 4, now());
        partial.runtime = Some(1000);
        store.insert_solution(partial);

        let snapshot = StatisticsEngine::new(store).compute_statistics_at(now()).await.unwrap();
        let perf = snapshot.performance;

        assert_eq!(perf.min_runtime, 4.0);
        assert_eq!(perf.max_runtime, 11.0);
        assert_eq!(perf.avg_runtime, 8.0);
        assert!(perf.min_runtime <= perf.avg_runtime && perf.avg_runtime <= perf.max_runtime);
        assert_eq!(perf.min_memory, 40.12);
        assert_eq!(perf.max_memory, 42.46);
        assert_eq!(perf.avg_memory, 41.19);
    }

    #[tokio::test]
    async fn test_tags_keep_top_ten_including_unused() {
        let mut store = scenario();
        for id in 1..=12 {
            store.insert_tag(tag(id, &format!("tag-{id:02}")));
        }
        store.tag_problem(1, 12);
        store.tag_problem(2, 12);
        store.tag_problem(2, 5);

        let snapshot = StatisticsEngine::new(store).compute_statistics_at(now()).await.unwrap();

        assert_eq!(snapshot.tags.len(), 10);
        assert_eq!(snapshot.tags[0].name, "tag-12");
        assert_eq!(snapshot.tags[0].count, 2);
        assert_eq!(snapshot.tags[1].name, "tag-05");
        // Unused tags follow by name
        assert_eq!(snapshot.tags[2].name, "tag-01");
        assert_eq!(snapshot.tags[2].count, 0);
    }

    #[tokio::test]
    async fn test_categories_include_empty_ones() {
        let mut store = scenario();
        store.insert_category(Category {
            id: 1,
            name: "Arrays".to_string(),
            description: Some("Array problems".to_string()),
            created_at: now(),
        });
        store.insert_category(Category {
            id: 2,
            name: "Graphs".to_string(),
            description: None,
            created_at: now(),
        });
        store.categorize_problem(1, 2);

        let snapshot = StatisticsEngine::new(store).compute_statistics_at(now()).await.unwrap();

        assert_eq!(snapshot.categories.len(), 2);
        assert_eq!(snapshot.categories[0].name, "Graphs");
        assert_eq!(snapshot.categories[0].count, 1);
        assert_eq!(snapshot.categories[1].count, 0);
        assert_eq!(snapshot.categories[1].description.as_deref(), Some("Array problems"));
    }

    #[tokio::test]
    async fn test_trends_skip_empty_and_old_buckets() {
        let mut store = InMemoryStatsStore::new();
        store.insert_problem(problem(1, Difficulty::Easy));
        store.insert_problem(problem(2, Difficulty::Easy));
        let created = [
            Utc.with_ymd_and_hms(2023, 1, 10, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap(),
        ];
        for (i, at) in created.into_iter().enumerate() {
            let id = i as i64 + 1;
            store.insert_solution(solution(id, 1 + id % 2, 1, at));
        }

        let snapshot = StatisticsEngine::new(store).compute_statistics_at(now()).await.unwrap();

        let months: Vec<_> = snapshot.trends.monthly.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["2024-02", "2024-06"]);
        assert_eq!(snapshot.trends.monthly[1].solutions_added, 2);
        assert_eq!(snapshot.trends.monthly[1].problems_solved, 2);

        // 2024-06-10 is a Monday; both June solutions share its week
        assert_eq!(snapshot.trends.weekly.len(), 1);
        assert_eq!(snapshot.trends.weekly[0].week, "2024-06-10");
        assert_eq!(snapshot.trends.weekly[0].solutions_added, 2);
    }

    #[tokio::test]
    async fn test_recent_activity_is_capped() {
        let mut store = InMemoryStatsStore::new();
        store.insert_problem(problem(1, Difficulty::Hard));
        for id in 1..=15 {
            store.insert_solution(solution(id, 1, id as i32, now() - Duration::minutes(id)));
        }

        let snapshot = StatisticsEngine::new(store).compute_statistics_at(now()).await.unwrap();

        assert_eq!(snapshot.recent_activity.len(), RECENT_ACTIVITY as usize);
        assert_eq!(snapshot.recent_activity[0].id, 1);
        assert_eq!(snapshot.recent_activity[9].id, 10);
    }

    #[tokio::test]
    async fn test_store_failure_fails_the_whole_snapshot() {
        let mut store = MockStatsStore::new();
        store.expect_count().returning(|_| Ok(1));
        store
            .expect_count_grouped_by()
            .returning(|_| Err(AppError::StoreUnavailable("connection reset".to_string())));
        store.expect_language_metrics().returning(|| Ok(Vec::new()));
        store
            .expect_solution_metrics()
            .returning(|_| Ok(MetricSummary::default()));
        store.expect_association_counts().returning(|_| Ok(Vec::new()));
        store
            .expect_bucket_by_time_truncation()
            .returning(|_, _| Ok(Vec::new()));
        store.expect_recent_solutions().returning(|_| Ok(Vec::new()));

        let result = StatisticsEngine::new(store).compute_statistics_at(now()).await;

        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_unknown_stored_value_is_internal_error() {
        let mut store = MockStatsStore::new();
        store.expect_count().returning(|_| Ok(0));
        store.expect_count_grouped_by().returning(|field| {
            Ok(match field {
                GroupField::Difficulty => vec![GroupCount {
                    key: "Impossible".to_string(),
                    count: 1,
                }],
                _ => Vec::new(),
            })
        });
        store.expect_language_metrics().returning(|| Ok(Vec::new()));
        store
            .expect_solution_metrics()
            .returning(|_| Ok(MetricSummary::default()));
        store.expect_association_counts().returning(|_| Ok(Vec::new()));
        store
            .expect_bucket_by_time_truncation()
            .returning(|_, _| Ok(Vec::new()));
        store.expect_recent_solutions().returning(|_| Ok(Vec::new()));

        let result = StatisticsEngine::new(store).compute_statistics_at(now()).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
