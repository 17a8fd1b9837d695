//! Domain invariants for Order Resolution
//!
//! Independent checks used by tests and by a debug assertion in the
//! resolver. None of these
//! share code with the Kahn's sort they verify.

use super::entities::InducedGraph;
use super::value_objects::ItemId;
use std::collections::{HashMap, HashSet};

/// INVARIANT-1: Topological Order
/// Every edge A → B has A placed before B in `order`.
pub fn invariant_topological_order(order: &[ItemId], graph: &InducedGraph) -> bool {
    let mut placed: HashSet<ItemId> = HashSet::new();

    for &item in order {
        for edge in &graph.edges {
            if edge.after != item {
                continue;
            }
            if !placed.contains(&edge.before) {
                return false;
            }
        }
        placed.insert(item);
    }

    true
}

/// INVARIANT-2: No Cycles
/// The induced graph must be a DAG.
pub fn invariant_no_cycles(graph: &InducedGraph) -> bool {
    let mut visited = HashSet::new();
    let mut rec_stack = HashSet::new();

    for &item in &graph.nodes {
        if has_cycle_dfs(graph, item, &mut visited, &mut rec_stack) {
            return false;
        }
    }

    true
}

fn has_cycle_dfs(
    graph: &InducedGraph,
    node: ItemId,
    visited: &mut HashSet<ItemId>,
    rec_stack: &mut HashSet<ItemId>,
) -> bool {
    if rec_stack.contains(&node) {
        return true; // Back edge
    }

    if visited.contains(&node) {
        return false;
    }

    visited.insert(node);
    rec_stack.insert(node);

    for neighbor in graph.successors(node) {
        if has_cycle_dfs(graph, neighbor, visited, rec_stack) {
            return true;
        }
    }

    rec_stack.remove(&node);
    false
}

/// INVARIANT-3: Completeness
/// Every member appears in `order` exactly once, and nothing else does.
pub fn invariant_completeness(order: &[ItemId], graph: &InducedGraph) -> bool {
    if order.len() != graph.node_count() {
        return false;
    }

    let mut counts: HashMap<ItemId, usize> = HashMap::new();
    for &item in order {
        *counts.entry(item).or_insert(0) += 1;
    }

    graph
        .nodes
        .iter()
        .all(|item| counts.get(item).copied() == Some(1))
}

/// INVARIANT-4: Rule Conformance
/// Every relevant rule has its `before` earlier than its `after` in `update`.
pub fn invariant_respects_rules(update: &[ItemId], graph: &InducedGraph) -> bool {
    let positions: HashMap<ItemId, usize> = update
        .iter()
        .enumerate()
        .map(|(pos, &item)| (item, pos))
        .collect();

    graph.edges.iter().all(|edge| {
        match (positions.get(&edge.before), positions.get(&edge.after)) {
            (Some(before), Some(after)) => before < after,
            _ => true,
        }
    })
}
