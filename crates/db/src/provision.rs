//! The provisioning orchestrator.
//!
//! A linear, single-pass sequence: connect, define schema, enable access
//! control, seed, verify. Schema definition is best-effort per statement;
//! a fatal access-control or seed failure aborts the remaining steps (the
//! seed transaction rolls back) and the report records why.

use crate::error::ProvisionError;
use crate::report::ProvisionReport;
use crate::{create_pool, health_check, policies, schema, seed, verify, DbPool};

pub struct Provisioner {
    pool: DbPool,
}

impl Provisioner {
    /// Open a connection pool against `database_url` and health-check it.
    pub async fn connect(database_url: &str) -> Result<Self, ProvisionError> {
        let pool = create_pool(database_url)
            .await
            .map_err(ProvisionError::Connection)?;
        health_check(&pool)
            .await
            .map_err(ProvisionError::Connection)?;
        Ok(Self::new(pool))
    }

    /// Wrap an existing pool. Used by tests.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run the full provisioning sequence and return the outcome record.
    ///
    /// Never returns `Err`: every failure ends up in the report, and the
    /// caller derives the exit status from [`ProvisionReport::is_success`].
    pub async fn run(&self) -> ProvisionReport {
        let mut report = ProvisionReport::default();

        tracing::info!("defining schema");
        schema::create_all(&self.pool, &mut report).await;

        tracing::info!("enabling row-level security");
        if let Err(err) = policies::enable_rls(&self.pool, &mut report).await {
            report.set_fatal(&err);
            return report;
        }
        if let Err(err) = policies::apply_policies(&self.pool, &mut report).await {
            report.set_fatal(&err);
            return report;
        }

        tracing::info!("seeding catalog");
        if let Err(err) = seed::seed_all(&self.pool, &mut report).await {
            report.set_fatal(&err);
            return report;
        }

        tracing::info!("verifying");
        match verify::summarize(&self.pool).await {
            Ok(summary) => report.verification = Some(summary),
            Err(err) => report.set_fatal(&err),
        }

        report
    }

    /// Release the connection pool.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
