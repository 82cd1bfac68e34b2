//! Statistics service

use sqlx::PgPool;

use crate::{
    error::AppResult,
    stats::{PgStatsStore, StatisticsEngine, StatsSnapshot},
};

/// Statistics service backed by the Postgres store
pub struct StatsService;

impl StatsService {
    /// Compute a fresh snapshot; nothing is cached between calls
    pub async fn snapshot(pool: &PgPool) -> AppResult<StatsSnapshot> {
        let engine = StatisticsEngine::new(PgStatsStore::new(pool.clone()));
        engine.compute_statistics().await
    }
}
