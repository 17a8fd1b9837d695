//! Error types for update ingest

use pe_01_order_resolution::ItemId;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Problem with a single rule or update line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    /// Rule line is not `before|after`
    #[error("Invalid rule format: expected `before|after`, got {0:?}")]
    RuleShape(String),

    /// Field is not an integer
    #[error("Failed to convert {value:?} to number: {source}")]
    NotANumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Update lists the same item twice
    #[error("Duplicate item {0} in update")]
    DuplicateItem(ItemId),
}

/// All errors that can occur while ingesting input
#[derive(Debug, Error)]
pub enum IngestError {
    /// Malformed rule line
    #[error("Failed to parse rule on line {line}: {source}")]
    Rule {
        line: usize,
        #[source]
        source: LineError,
    },

    /// Malformed update line
    #[error("Failed to parse update on line {line}: {source}")]
    Update {
        line: usize,
        #[source]
        source: LineError,
    },

    /// Input file could not be read
    #[error("Failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    /// 1-based line number of the offending line, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            IngestError::Rule { line, .. } | IngestError::Update { line, .. } => Some(*line),
            IngestError::Io { .. } => None,
        }
    }
}
