//! # Precedence-Engine Runner
//!
//! Reads rules and updates from a file, validates every update against
//! the rules, repairs the invalid ones and prints two sums:
//!
//! 1. middle items of the updates that were already in order
//! 2. middle items of the repaired orders of the others
//!
//! ## Usage
//!
//! ```text
//! pe-runner [INPUT]            # INPUT defaults to $PE_INPUT, then input.txt
//! PE_OUTPUT=json pe-runner     # machine-readable report
//! ```

use anyhow::Result;
use pe_runner::{load_config, render_report, run};
use pe_telemetry::{init_telemetry, TelemetryConfig};
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    init_telemetry(&TelemetryConfig::from_env())?;

    // Load configuration
    let config = load_config(|key| std::env::var(key).ok(), std::env::args().nth(1))?;
    info!(input = %config.input.display(), output = ?config.output, "Starting runner");

    let report = run(&config)?;
    print!("{}", render_report(&report, config.output)?);

    Ok(())
}
