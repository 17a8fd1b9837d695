//! `tracing-subscriber` setup.
//!
//! Installs a global subscriber with an `EnvFilter` and either a JSON or a
//! human-readable fmt layer. Both layers write to stderr; stdout belongs to
//! the program's own output.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Build the level filter from `config.log_level`.
///
/// `RUST_LOG` is only consulted by `TelemetryConfig::from_env`, as a
/// fallback for `PE_LOG_LEVEL`.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Config(e.to_string()))
}

/// Assemble the subscriber, with log lines going to `writer`.
pub fn build_subscriber<W>(
    config: &TelemetryConfig,
    writer: W,
) -> Result<Box<dyn Subscriber + Send + Sync>, TelemetryError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    if !config.console_output {
        return Ok(Box::new(registry));
    }

    if config.json_logs {
        // JSON output for log shipping
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(writer);

        Ok(Box::new(registry.with(json_layer)))
    } else {
        // Pretty output for terminals
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(writer)
            .with_ansi(true);

        Ok(Box::new(registry.with(fmt_layer)))
    }
}

/// Install the global subscriber, logging to stderr.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    build_subscriber(config, std::io::stderr)?
        .try_init()
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::debug!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Logging initialized"
    );

    Ok(())
}
