// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity lookup CLI
//!
//! Queries the activities API and prints the activity with the configured
//! sequence number. Configuration comes from the environment (see `.env`).

use activity_lookup::config::{Config, LogFormat};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_logging(config.log_format);

    tracing::info!(
        url = %config.activities_url(),
        sequence = config.target_sequence,
        "Looking up activity"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    activity_lookup::run(&config, &mut out)
        .await
        .with_context(|| format!("Lookup against {} failed", config.activities_url()))?;

    Ok(())
}

/// Initialize logging on stderr so stdout carries only the report.
fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("activity_lookup=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
