//! Environment-sourced configuration.

use renovese_db::ProvisionError;

/// Connection settings for one provisioning run, collected up front so the
/// provisioner itself never touches the environment.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    /// Postgres connection string.
    pub database_url: String,
}

impl ProvisionConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `DATABASE_URL`, falling back to the legacy `POSTGRES_URL`
    /// alias. A missing value is a configuration error reported before any
    /// network activity.
    pub fn from_env() -> Result<Self, ProvisionError> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("POSTGRES_URL"))
            .map_err(|_| ProvisionError::MissingEnv("DATABASE_URL"))?;

        Ok(Self { database_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // One test fn: the cases mutate shared process environment and must
    // not run concurrently.
    #[test]
    fn test_from_env_resolution() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("POSTGRES_URL");
        assert_matches!(
            ProvisionConfig::from_env(),
            Err(ProvisionError::MissingEnv("DATABASE_URL"))
        );

        std::env::set_var("POSTGRES_URL", "postgres://legacy/db");
        let config = ProvisionConfig::from_env().unwrap();
        assert_eq!(config.database_url, "postgres://legacy/db");

        std::env::set_var("DATABASE_URL", "postgres://primary/db");
        let config = ProvisionConfig::from_env().unwrap();
        assert_eq!(config.database_url, "postgres://primary/db");

        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("POSTGRES_URL");
    }
}
