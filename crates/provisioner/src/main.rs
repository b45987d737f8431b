//! One-shot database provisioner for the Renove-se application.
//!
//! Reads the connection string from the environment, applies the idempotent
//! schema / row-level-security / seed sequence, logs a per-statement
//! summary, and exits non-zero on any fatal failure.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use renovese_db::Provisioner;

mod config;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "renovese_provisioner=info,renovese_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match config::ProvisionConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "configuration error");
            return ExitCode::FAILURE;
        }
    };

    let provisioner = match Provisioner::connect(&config.database_url).await {
        Ok(provisioner) => provisioner,
        Err(err) => {
            tracing::error!(error = %err, "connection error");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("connected to database");

    let report = provisioner.run().await;
    report.log_summary();
    provisioner.close().await;

    if report.is_success() {
        tracing::info!("database setup completed successfully");
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
