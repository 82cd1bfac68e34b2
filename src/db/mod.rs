//! Persistence
//!
//! Pool construction, the embedded schema migrations and one repository per
//! stored entity.

pub mod connection;
pub mod repositories;

use sqlx::PgPool;

pub use connection::*;

/// Apply the embedded schema migrations that have not run yet
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    let migrator = sqlx::migrate!("./migrations");
    tracing::debug!(migrations = migrator.iter().count(), "Applying schema migrations");
    migrator.run(pool).await
}
