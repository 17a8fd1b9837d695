//! # Runner Library
//!
//! Wires ingest, resolution and reporting together. The `main.rs` binary
//! is a thin shell around [`run`] and [`render_report`].

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use pe_01_order_resolution::{BatchReport, OrderResolutionApi, OrderResolutionService, ResolverConfig};
use pe_02_update_ingest::load_input;
use pe_telemetry::subsystem_span;
use tracing::{info, warn};

/// How the report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format {other:?} (expected text or json)"),
        }
    }
}

/// Complete runner configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    /// Input file with rules and updates.
    pub input: PathBuf,
    /// Resolver limits and cycle policy.
    pub resolver: ResolverConfig,
    /// Report format.
    pub output: OutputFormat,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.txt"),
            resolver: ResolverConfig::default(),
            output: OutputFormat::Text,
        }
    }
}

/// Load configuration from a key lookup (the environment in `main`).
///
/// - `PE_INPUT`: input file (default `input.txt`); a CLI argument wins
/// - `PE_CONFIG`: JSON file holding a `ResolverConfig`
/// - `PE_STRICT_CYCLES`: `true`/`1` to fail the batch on cyclic updates
/// - `PE_OUTPUT`: `text` or `json`
pub fn load_config(
    lookup: impl Fn(&str) -> Option<String>,
    input_arg: Option<String>,
) -> Result<RunnerConfig> {
    let mut config = RunnerConfig::default();

    if let Some(path) = lookup("PE_CONFIG") {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read resolver config {path}"))?;
        config.resolver = serde_json::from_str(&text)
            .with_context(|| format!("Invalid resolver config {path}"))?;
        info!(path = %path, "Loaded resolver config");
    }

    if let Some(strict) = lookup("PE_STRICT_CYCLES") {
        config.resolver.strict_cycles = strict.to_lowercase() == "true" || strict == "1";
    }

    if let Some(output) = lookup("PE_OUTPUT") {
        config.output = output.parse()?;
    }

    if let Some(input) = input_arg.or_else(|| lookup("PE_INPUT")) {
        config.input = PathBuf::from(input);
    }

    Ok(config)
}

/// Read the input file and resolve every update in it.
pub fn run(config: &RunnerConfig) -> Result<BatchReport> {
    let _span = subsystem_span!("run", subsystem = "pe-runner", input = %config.input.display())
        .entered();

    let manifest = load_input(&config.input)
        .with_context(|| format!("Failed to load {}", config.input.display()))?;

    let service = OrderResolutionService::with_config(config.resolver.clone());
    let report = service
        .resolve_batch(&manifest.rules, &manifest.updates)
        .context("Batch resolution failed")?;

    if !report.cyclic_updates.is_empty() {
        warn!(
            indices = ?report.cyclic_updates,
            "Updates with cyclic rules were excluded from both sums"
        );
    }

    Ok(report)
}

/// Render a report for stdout.
pub fn render_report(report: &BatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = format!(
                "Part 1: Sum of middle numbers for correct updates: {}\n\
                 Part 2: Sum of middle numbers after ordering incorrect updates: {}\n",
                report.valid_middle_sum, report.repaired_middle_sum
            );
            if !report.cyclic_updates.is_empty() {
                out.push_str(&format!(
                    "Skipped {} update(s) with cyclic rules: {:?}\n",
                    report.cyclic_updates.len(),
                    report.cyclic_updates
                ));
            }
            Ok(out)
        }
        OutputFormat::Json => serde_json::to_string_pretty(report).context("Failed to encode report"),
    }
}
