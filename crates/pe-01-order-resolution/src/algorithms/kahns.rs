//! Kahn's Topological Sort Algorithm
//!
//! O(V + E) complexity, detects cycles, deterministic tie-breaking.

use crate::domain::entities::InducedGraph;
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::ItemId;
use std::collections::VecDeque;

/// Perform Kahn's topological sort on an induced graph.
///
/// The worklist is a FIFO queue seeded with zero in-degree nodes in
/// first-seen order. Successors are visited in edge insertion order, so
/// the result is fully determined by the update and the rule order.
///
/// Returns `OrderingError::CycleDetected` with the partial order if not
/// every node could be placed.
pub fn kahns_topological_sort(graph: &InducedGraph) -> Result<Vec<ItemId>, OrderingError> {
    if graph.node_count() == 0 {
        return Ok(Vec::new());
    }

    // 1. Copy in-degrees (we'll modify them)
    let mut in_degree = graph.in_degree.clone();

    // 2. Seed queue with zero in-degree nodes, first-seen order
    let mut queue: VecDeque<usize> = graph.get_zero_degree_nodes().into();

    // 3. Drain
    let mut order = Vec::with_capacity(graph.node_count());

    while let Some(node) = queue.pop_front() {
        order.push(graph.nodes[node]);

        for &successor in &graph.adjacency[node] {
            let degree = &mut in_degree[successor];
            *degree = degree.saturating_sub(1);
            if *degree == 0 {
                queue.push_back(successor);
            }
        }
    }

    // 4. Cycle detection: if not all nodes placed, there's a cycle
    if order.len() < graph.node_count() {
        return Err(OrderingError::CycleDetected {
            unresolved: graph.node_count() - order.len(),
            partial: order,
        });
    }

    Ok(order)
}
