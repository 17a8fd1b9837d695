//! Order Resolution Service
//!
//! Main service implementing OrderResolutionApi.

use crate::algorithms::{build_induced_graph, resolve_order};
use crate::config::ResolverConfig;
use crate::domain::entities::{BatchReport, InducedGraph, Resolution};
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{ItemId, ResolutionStatus, Rule};
use crate::ports::inbound::OrderResolutionApi;

use tracing::{debug, info, warn};

/// Order Resolution Service
///
/// Orchestrates the batch pipeline:
/// 1. Validate input limits
/// 2. Resolve each update against the rules
/// 3. Aggregate middle items by outcome
/// 4. Apply the cycle policy
pub struct OrderResolutionService {
    config: ResolverConfig,
}

impl OrderResolutionService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Validate rule count and update lengths
    fn validate_batch(&self, rules: &[Rule], updates: &[Vec<ItemId>]) -> Result<(), OrderingError> {
        let max_rules = self.config.max_rule_count;
        if max_rules > 0 && rules.len() > max_rules {
            return Err(OrderingError::TooManyRules {
                count: rules.len(),
                max: max_rules,
            });
        }

        let max_len = self.config.max_update_len;
        if max_len == 0 {
            return Ok(());
        }

        if let Some((index, update)) = updates
            .iter()
            .enumerate()
            .find(|(_, update)| update.len() > max_len)
        {
            return Err(OrderingError::UpdateTooLarge {
                index,
                len: update.len(),
                max: max_len,
            });
        }

        Ok(())
    }
}

impl Default for OrderResolutionService {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderResolutionApi for OrderResolutionService {
    fn resolve(&self, update: &[ItemId], rules: &[Rule]) -> Resolution {
        let resolution = resolve_order(update, rules);

        match resolution.status {
            ResolutionStatus::Cyclic => warn!(
                update_len = update.len(),
                placed = resolution.order.len(),
                "Relevant rules form a cycle, order is partial"
            ),
            status => debug!(update_len = update.len(), ?status, "Update resolved"),
        }

        resolution
    }

    fn build_induced_graph(&self, update: &[ItemId], rules: &[Rule]) -> InducedGraph {
        build_induced_graph(update, rules)
    }

    fn resolve_batch(
        &self,
        rules: &[Rule],
        updates: &[Vec<ItemId>],
    ) -> Result<BatchReport, OrderingError> {
        // 1. Validate input
        self.validate_batch(rules, updates)?;

        info!(
            rule_count = rules.len(),
            update_count = updates.len(),
            "Resolving update batch"
        );

        // 2. Resolve each update; a cyclic one never stops the rest
        let mut report = BatchReport::new();
        for (index, update) in updates.iter().enumerate() {
            let resolution = self.resolve(update, rules);
            if resolution.is_cyclic() {
                debug!(index, "Excluding cyclic update from sums");
            }
            report.record(index, &resolution)?;
        }

        info!(
            valid = report.valid_count,
            repaired = report.repaired_count,
            cyclic = report.cyclic_updates.len(),
            valid_middle_sum = report.valid_middle_sum,
            repaired_middle_sum = report.repaired_middle_sum,
            "Batch resolution complete"
        );

        // 3. Cycle policy
        if self.config.strict_cycles && !report.cyclic_updates.is_empty() {
            return Err(OrderingError::CyclicUpdates {
                indices: report.cyclic_updates,
            });
        }

        Ok(report)
    }
}
