//! Order Resolver
//!
//! Validates one update against the rule set and repairs it when needed.
//! Pure function of its inputs: graph construction, queue drain, cycle
//! check, validity comparison.

use super::induced_graph::build_induced_graph;
use super::kahns::kahns_topological_sort;
use crate::domain::entities::Resolution;
use crate::domain::invariants::invariant_topological_order;
use crate::domain::value_objects::{ItemId, Rule};
use std::collections::HashMap;

/// Resolve `update` against `rules`.
///
/// - Cycle among the relevant rules: `Cyclic`, order is the partial sort.
/// - Update follows the computed order: `Valid`, order is the update.
/// - Otherwise: `Repaired`, order is the computed topological order.
///
/// An update that repeats an item is never `Valid`: its repair lists each
/// item once.
pub fn resolve_order(update: &[ItemId], rules: &[Rule]) -> Resolution {
    let graph = build_induced_graph(update, rules);

    let order = match kahns_topological_sort(&graph) {
        Ok(order) => order,
        Err(err) => return Resolution::cyclic(err.into_partial_order().unwrap_or_default()),
    };
    debug_assert!(invariant_topological_order(&order, &graph));

    if order.len() == update.len() && follows_order(update, &order) {
        Resolution::valid(update.to_vec())
    } else {
        Resolution::repaired(order)
    }
}

/// True if no adjacent pair of `update` is inverted relative to `order`.
///
/// Items missing from `order` are treated as conflicting.
pub fn follows_order(update: &[ItemId], order: &[ItemId]) -> bool {
    let positions: HashMap<ItemId, usize> = order
        .iter()
        .enumerate()
        .map(|(pos, &item)| (item, pos))
        .collect();

    update.windows(2).all(|pair| {
        match (positions.get(&pair[0]), positions.get(&pair[1])) {
            (Some(earlier), Some(later)) => earlier <= later,
            _ => false,
        }
    })
}
