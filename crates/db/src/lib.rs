//! Postgres layer for the Renove-se provisioner.
//!
//! Table and policy definitions, seed insertion, verification queries, and
//! the [`Provisioner`] orchestrator that applies them as one linear,
//! idempotent sequence.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod policies;
pub mod provision;
pub mod report;
pub mod schema;
pub mod seed;
pub mod verify;

pub use error::ProvisionError;
pub use provision::Provisioner;
pub use report::{ProvisionReport, StepOutcome, StepStatus};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// The provisioner is a single-pass batch job, so the pool stays small.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url)
        .await
}

/// Verify the database connection is alive.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
