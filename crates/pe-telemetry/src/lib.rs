//! # PE Telemetry
//!
//! Structured logging for Precedence-Engine binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pe_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PE_SERVICE_NAME` | `precedence-engine` | Service name in logs |
//! | `PE_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `PE_CONSOLE_OUTPUT` | `true` | Write logs to stderr |
//! | `PE_JSON_LOGS` | `false` | JSON formatted logs |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{build_filter, build_subscriber};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging for the process.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_setup::init_tracing(config)
}

/// Convenience macro for creating a span with subsystem context.
///
/// ```rust,ignore
/// let _span = subsystem_span!("resolve_batch", subsystem = "pe-01", updates = 6).entered();
/// ```
#[macro_export]
macro_rules! subsystem_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
