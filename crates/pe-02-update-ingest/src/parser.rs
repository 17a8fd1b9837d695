//! Text format parser
//!
//! ```text
//! 47|53        <- rule block, one `before|after` per line
//! 97|13
//!              <- blank line ends the rule block
//! 75,47,61     <- update block, comma-separated items
//! ```

use crate::errors::{IngestError, LineError};
use pe_01_order_resolution::{ItemId, Rule};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parsed rules and updates, ready for the resolver
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateManifest {
    pub rules: Vec<Rule>,
    pub updates: Vec<Vec<ItemId>>,
}

fn parse_item(field: &str) -> Result<ItemId, LineError> {
    let field = field.trim();
    field.parse().map_err(|source| LineError::NotANumber {
        value: field.to_string(),
        source,
    })
}

/// Parse one `before|after` line
pub fn parse_rule(line: &str) -> Result<Rule, LineError> {
    let mut parts = line.split('|');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(before), Some(after), None) => Ok(Rule::new(parse_item(before)?, parse_item(after)?)),
        _ => Err(LineError::RuleShape(line.to_string())),
    }
}

/// Parse one comma-separated update line
pub fn parse_update(line: &str) -> Result<Vec<ItemId>, LineError> {
    let mut seen = HashSet::new();
    let mut update = Vec::new();

    for field in line.split(',') {
        let item = parse_item(field)?;
        if !seen.insert(item) {
            return Err(LineError::DuplicateItem(item));
        }
        update.push(item);
    }

    Ok(update)
}

/// Parse a whole input: rule block, blank line, update block.
pub fn parse_input(text: &str) -> Result<UpdateManifest, IngestError> {
    let mut manifest = UpdateManifest::default();
    let mut parsing_rules = true;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            parsing_rules = false;
            continue;
        }

        if parsing_rules {
            let rule = parse_rule(line).map_err(|source| IngestError::Rule {
                line: idx + 1,
                source,
            })?;
            manifest.rules.push(rule);
        } else {
            let update = parse_update(line).map_err(|source| IngestError::Update {
                line: idx + 1,
                source,
            })?;
            manifest.updates.push(update);
        }
    }

    debug!(
        rules = manifest.rules.len(),
        updates = manifest.updates.len(),
        "Parsed input"
    );

    Ok(manifest)
}

/// Read and parse an input file
pub fn load_input(path: impl AsRef<Path>) -> Result<UpdateManifest, IngestError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_input(&text).inspect_err(|err| {
        warn!(path = %path.display(), line = err.line(), error = %err, "Rejected input file");
    })
}
