//! Configuration for the Order Resolution Subsystem

use serde::{Deserialize, Serialize};

/// Resolver configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum rules accepted per batch (0 = unlimited)
    pub max_rule_count: usize,
    /// Maximum items per update (0 = unlimited)
    pub max_update_len: usize,
    /// Report cyclic updates as a batch error once every update is processed
    pub strict_cycles: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_rule_count: 100_000,
            max_update_len: 10_000,
            strict_cycles: false,
        }
    }
}

impl ResolverConfig {
    /// Configuration without size limits
    pub fn unbounded() -> Self {
        Self {
            max_rule_count: 0,
            max_update_len: 0,
            ..Self::default()
        }
    }

    pub fn with_strict_cycles(mut self, strict: bool) -> Self {
        self.strict_cycles = strict;
        self
    }
}
