//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{BatchReport, InducedGraph, Resolution};
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{ItemId, Rule};

/// Primary Order Resolution API
pub trait OrderResolutionApi: Send + Sync {
    /// Validate one update and repair it if needed.
    ///
    /// Total over well-formed input: a cycle among the relevant rules is
    /// reported in the returned `Resolution`, never as an error.
    fn resolve(&self, update: &[ItemId], rules: &[Rule]) -> Resolution;

    /// Build the graph induced by an update on the rule set.
    fn build_induced_graph(&self, update: &[ItemId], rules: &[Rule]) -> InducedGraph;

    /// Resolve every update and aggregate middle items.
    ///
    /// 1. Checks configured limits
    /// 2. Resolves each update independently
    /// 3. Sums middle items of valid updates and of repaired orders
    fn resolve_batch(
        &self,
        rules: &[Rule],
        updates: &[Vec<ItemId>],
    ) -> Result<BatchReport, OrderingError>;
}
