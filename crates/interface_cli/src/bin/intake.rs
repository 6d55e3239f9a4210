//! Identity Intake - Console Binary
//!
//! Collects and validates birthday, gender, email, name, phone number and
//! PESEL from stdin, writing prompts to stdout and logs to stderr.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin identity-intake
//!
//! INTAKE_MAX_ATTEMPTS=5 INTAKE_SUMMARY_FORMAT=json cargo run --bin identity-intake
//! ```
//!
//! # Environment Variables
//!
//! * `INTAKE_MAX_ATTEMPTS` - Attempts per field (default: 3)
//! * `INTAKE_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: warn)
//! * `INTAKE_SUMMARY_FORMAT` - `text` or `json` (default: text)

use std::io;

use anyhow::Context;
use core_kernel::SystemClock;
use interface_cli::{IntakeConfig, IntakeSession, SessionOutcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = IntakeConfig::from_env().context("failed to load intake configuration")?;

    init_tracing(&config.log_level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = IntakeSession::new(stdin.lock(), stdout.lock(), SystemClock, &config);

    tracing::info!(
        session_id = %session.id(),
        max_attempts = config.max_attempts,
        "Starting intake session"
    );

    match session.run().context("intake session failed")? {
        SessionOutcome::Completed(_) => {
            tracing::info!("Intake completed");
        }
        SessionOutcome::Aborted { field, attempts, .. } => {
            tracing::info!(%field, attempts, "Intake aborted");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr so logs never mix
/// with the prompts on stdout.
///
/// # Arguments
///
/// * `log_level` - Filter used when `RUST_LOG` is not set
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .init();
}
