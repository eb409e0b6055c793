//! # Logging
//!
//! Diagnostics go to stderr through `tracing_subscriber::fmt`, so stdout only
//! ever carries the report. The filter comes from `RUST_LOG` and defaults to
//! `warn`; run with `RUST_LOG=debug` to see decoded identifiers, or
//! `RUST_LOG=error` to see the cause behind an "invalid URL format" message.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_file(true),
        )
        .try_init()?;
    Ok(())
}
