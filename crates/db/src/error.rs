//! Provisioner error type and SQLSTATE classification helpers.

/// Errors that abort a provisioning run.
///
/// Tolerable conditions ("already exists") never surface here; they are
/// recorded as skipped steps in the report instead.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error("Missing required environment variable {0}")]
    MissingEnv(&'static str),

    #[error("Failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Fatal statement failure on {object}: {source}")]
    Statement {
        object: String,
        #[source]
        source: sqlx::Error,
    },
}

impl ProvisionError {
    pub(crate) fn statement(object: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Statement {
            object: object.into(),
            source,
        }
    }
}

/// SQLSTATE for `duplicate_object` (e.g. a policy that already exists).
const DUPLICATE_OBJECT: &str = "42710";

/// SQLSTATE for `duplicate_table`.
const DUPLICATE_TABLE: &str = "42P07";

/// True if the error means the object already exists. Re-runs hit this on
/// every `CREATE POLICY`; it is logged as skipped, never as a failure.
pub fn is_duplicate_object(err: &sqlx::Error) -> bool {
    matches!(
        sqlstate(err),
        Some(code) if code == DUPLICATE_OBJECT || code == DUPLICATE_TABLE
    )
}

/// True if the error is an integrity-constraint violation (SQLSTATE class
/// 23): unique, foreign-key, or CHECK failures in seed data.
pub fn is_constraint_violation(err: &sqlx::Error) -> bool {
    matches!(sqlstate(err), Some(code) if code.starts_with("23"))
}

fn sqlstate(err: &sqlx::Error) -> Option<String> {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.into_owned())
}
