//! Per-statement outcome tracking and the operator-facing summary.

use crate::error::ProvisionError;

/// How a single provisioning statement ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Statement executed.
    Applied,
    /// Statement was a no-op because the object or data already exists.
    Skipped,
    /// Statement failed; see the outcome detail.
    Failed,
}

/// Outcome of one statement, keyed by provisioning step and object name.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// Step label: `schema`, `index`, `rls`, `policy`, `seed`, or `verify`.
    pub step: &'static str,
    /// The table, index, or policy the statement targeted.
    pub object: String,
    pub status: StepStatus,
    pub detail: Option<String>,
}

/// Row counts and catalog listing gathered by the verification step.
#[derive(Debug, Clone, Default)]
pub struct VerifySummary {
    /// (table name, row count) for every provisioned table.
    pub table_counts: Vec<(String, i64)>,
    /// Active module titles in `order_index` order.
    pub active_module_titles: Vec<String>,
}

/// Full record of a provisioning run.
#[derive(Debug, Default)]
pub struct ProvisionReport {
    pub outcomes: Vec<StepOutcome>,
    /// Set when a fatal error aborted the run before completion.
    pub fatal: Option<String>,
    pub verification: Option<VerifySummary>,
}

impl ProvisionReport {
    pub fn applied(&mut self, step: &'static str, object: impl Into<String>) {
        let object = object.into();
        tracing::info!(step, %object, "applied");
        self.push(step, object, StepStatus::Applied, None);
    }

    pub fn skipped(&mut self, step: &'static str, object: impl Into<String>, detail: &str) {
        let object = object.into();
        tracing::info!(step, %object, detail, "skipped");
        self.push(step, object, StepStatus::Skipped, Some(detail.to_string()));
    }

    pub fn failed(&mut self, step: &'static str, object: impl Into<String>, err: &sqlx::Error) {
        let object = object.into();
        tracing::error!(step, %object, error = %err, "statement failed");
        self.push(step, object, StepStatus::Failed, Some(err.to_string()));
    }

    /// Record the error that aborted the run.
    pub fn set_fatal(&mut self, err: &ProvisionError) {
        tracing::error!(error = %err, "provisioning aborted");
        self.fatal = Some(err.to_string());
    }

    fn push(
        &mut self,
        step: &'static str,
        object: String,
        status: StepStatus,
        detail: Option<String>,
    ) {
        self.outcomes.push(StepOutcome {
            step,
            object,
            status,
            detail,
        });
    }

    pub fn count(&self, status: StepStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    /// True when nothing failed and no fatal error occurred. The process
    /// exit code is derived from this.
    pub fn is_success(&self) -> bool {
        self.fatal.is_none() && self.count(StepStatus::Failed) == 0
    }

    /// Emit the human-readable end-of-run summary.
    pub fn log_summary(&self) {
        tracing::info!(
            applied = self.count(StepStatus::Applied),
            skipped = self.count(StepStatus::Skipped),
            failed = self.count(StepStatus::Failed),
            "provisioning summary"
        );

        for outcome in &self.outcomes {
            if outcome.status == StepStatus::Failed {
                tracing::error!(
                    step = outcome.step,
                    object = %outcome.object,
                    detail = outcome.detail.as_deref().unwrap_or(""),
                    "failed statement"
                );
            }
        }

        if let Some(summary) = &self.verification {
            for (table, count) in &summary.table_counts {
                tracing::info!(%table, rows = count, "table verified");
            }
            for title in &summary.active_module_titles {
                tracing::info!(module = %title, "active module");
            }
        }

        if let Some(fatal) = &self.fatal {
            tracing::error!(error = %fatal, "run aborted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_success() {
        assert!(ProvisionReport::default().is_success());
    }

    #[test]
    fn test_skipped_steps_do_not_fail_the_run() {
        let mut report = ProvisionReport::default();
        report.applied("schema", "transformation_modules");
        report.skipped("policy", "goals_owner", "already exists");
        assert!(report.is_success());
        assert_eq!(report.count(StepStatus::Skipped), 1);
    }

    #[test]
    fn test_failed_step_fails_the_run() {
        let mut report = ProvisionReport::default();
        report.failed(
            "schema",
            "goals",
            &sqlx::Error::RowNotFound, // any sqlx error works for the record
        );
        assert!(!report.is_success());
    }

    #[test]
    fn test_fatal_fails_the_run() {
        let mut report = ProvisionReport::default();
        report.applied("schema", "goals");
        report.set_fatal(&ProvisionError::MissingEnv("DATABASE_URL"));
        assert!(!report.is_success());
    }
}
