//! Connection pool management

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::DatabaseConfig;

/// How long a request waits for a pooled connection before the store is
/// reported unavailable
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a pool against the configured database
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&config.url)
        .await
}
