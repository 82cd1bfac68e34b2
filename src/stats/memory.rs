//! In-memory statistics store
//!
//! Answers the same questions as the Postgres store over plain vectors. Used
//! to exercise the engine without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{
    store::{
        ActivityProblem, AssociationCount, AssociationKind, CountTarget, GroupCount, GroupField,
        LanguageMetrics, MetricSummary, MetricsScope, RecentSolution, StatsStore, TimeBucket,
    },
    trend::{bucket_by_truncation, TruncateUnit},
};
use crate::{
    error::AppResult,
    models::{Category, Problem, Solution, Tag},
};

/// Store backed by owned records and `(problem_id, other_id)` join pairs
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatsStore {
    problems: Vec<Problem>,
    solutions: Vec<Solution>,
    tags: Vec<Tag>,
    categories: Vec<Category>,
    problem_tags: Vec<(i64, i64)>,
    problem_categories: Vec<(i64, i64)>,
}

impl InMemoryStatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_problem(&mut self, problem: Problem) {
        self.problems.push(problem);
    }

    pub fn insert_solution(&mut self, solution: Solution) {
        self.solutions.push(solution);
    }

    pub fn insert_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    pub fn insert_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Attach a tag to a problem; repeated pairs are ignored
    pub fn tag_problem(&mut self, problem_id: i64, tag_id: i64) {
        if !self.problem_tags.contains(&(problem_id, tag_id)) {
            self.problem_tags.push((problem_id, tag_id));
        }
    }

    /// File a problem under a category; repeated pairs are ignored
    pub fn categorize_problem(&mut self, problem_id: i64, category_id: i64) {
        if !self.problem_categories.contains(&(problem_id, category_id)) {
            self.problem_categories.push((problem_id, category_id));
        }
    }

    fn linked_problems(pairs: &[(i64, i64)], other_id: i64) -> i64 {
        pairs.iter().filter(|(_, id)| *id == other_id).count() as i64
    }
}

fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), value| (sum + value, n + 1));
    (n > 0).then(|| sum / n as f64)
}

fn min_max<I: IntoIterator<Item = f64>>(values: I) -> (Option<f64>, Option<f64>) {
    values.into_iter().fold((None, None), |(min, max), value| {
        (
            Some(min.map_or(value, |m: f64| m.min(value))),
            Some(max.map_or(value, |m: f64| m.max(value))),
        )
    })
}

#[async_trait]
impl StatsStore for InMemoryStatsStore {
    async fn count(&self, target: CountTarget) -> AppResult<i64> {
        let count = match target {
            CountTarget::Problems => self.problems.len(),
            CountTarget::StarredProblems => self.problems.iter().filter(|p| p.starred).count(),
            CountTarget::Solutions => self.solutions.len(),
        };
        Ok(count as i64)
    }

    async fn count_grouped_by(&self, field: GroupField) -> AppResult<Vec<GroupCount>> {
        let keys: Vec<&'static str> = match field {
            GroupField::Difficulty => self.problems.iter().map(|p| p.difficulty.as_str()).collect(),
            GroupField::Status => self.solutions.iter().map(|s| s.status.as_str()).collect(),
        };

        let mut groups: BTreeMap<&str, i64> = BTreeMap::new();
        for key in keys {
            *groups.entry(key).or_default() += 1;
        }

        Ok(groups
            .into_iter()
            .map(|(key, count)| GroupCount {
                key: key.to_string(),
                count,
            })
            .collect())
    }

    async fn language_metrics(&self) -> AppResult<Vec<LanguageMetrics>> {
        let mut by_language: BTreeMap<&str, Vec<&Solution>> = BTreeMap::new();
        for solution in &self.solutions {
            by_language.entry(solution.language.as_str()).or_default().push(solution);
        }

        Ok(by_language
            .into_iter()
            .map(|(language, solutions)| LanguageMetrics {
                language: language.to_string(),
                count: solutions.len() as i64,
                avg_runtime: mean(solutions.iter().filter_map(|s| s.runtime).map(f64::from)),
                avg_memory: mean(solutions.iter().filter_map(|s| s.memory)),
            })
            .collect())
    }

    async fn solution_metrics(&self, scope: MetricsScope) -> AppResult<MetricSummary> {
        let solutions: Vec<&Solution> = self
            .solutions
            .iter()
            .filter(|s| match scope {
                MetricsScope::All => true,
                MetricsScope::WithRuntimeAndMemory => s.runtime.is_some() && s.memory.is_some(),
            })
            .collect();

        let runtimes: Vec<f64> = solutions.iter().filter_map(|s| s.runtime).map(f64::from).collect();
        let memories: Vec<f64> = solutions.iter().filter_map(|s| s.memory).collect();
        let (min_runtime, max_runtime) = min_max(runtimes.iter().copied());
        let (min_memory, max_memory) = min_max(memories.iter().copied());

        Ok(MetricSummary {
            avg_attempt_no: mean(solutions.iter().map(|s| f64::from(s.attempt_no))),
            avg_runtime: mean(runtimes),
            min_runtime,
            max_runtime,
            avg_memory: mean(memories),
            min_memory,
            max_memory,
        })
    }

    async fn association_counts(&self, kind: AssociationKind) -> AppResult<Vec<AssociationCount>> {
        let counts = match kind {
            AssociationKind::Tags => self
                .tags
                .iter()
                .map(|tag| AssociationCount {
                    name: tag.name.clone(),
                    detail: tag.color.clone(),
                    count: Self::linked_problems(&self.problem_tags, tag.id),
                })
                .collect(),
            AssociationKind::Categories => self
                .categories
                .iter()
                .map(|category| AssociationCount {
                    name: category.name.clone(),
                    detail: category.description.clone(),
                    count: Self::linked_problems(&self.problem_categories, category.id),
                })
                .collect(),
        };
        Ok(counts)
    }

    async fn bucket_by_time_truncation(
        &self,
        unit: TruncateUnit,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<TimeBucket>> {
        let rows = self.solutions.iter().map(|s| (s.created_at, s.problem_id));
        Ok(bucket_by_truncation(rows, unit, since))
    }

    async fn recent_solutions(&self, limit: i64) -> AppResult<Vec<RecentSolution>> {
        let mut solutions: Vec<&Solution> = self.solutions.iter().collect();
        solutions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(solutions
            .into_iter()
            .filter_map(|s| {
                let problem = self.problems.iter().find(|p| p.id == s.problem_id)?;
                Some(RecentSolution {
                    id: s.id,
                    language: s.language,
                    status: s.status,
                    created_at: s.created_at,
                    problem: ActivityProblem {
                        lc_id: problem.lc_id,
                        title: problem.title.clone(),
                        difficulty: problem.difficulty,
                    },
                })
            })
            .take(usize::try_from(limit).unwrap_or(0))
            .collect())
    }
}
