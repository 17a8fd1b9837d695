//! Induced Graph Builder
//!
//! Builds the precedence graph for a single update from the global rule set.

use crate::domain::entities::InducedGraph;
use crate::domain::value_objects::{ItemId, Rule};

/// Build the graph induced by `update` on `rules`.
///
/// Nodes are the update's items in first-seen order. A rule becomes an
/// edge only if both of its endpoints are members; every other rule is
/// ignored for this update. Duplicate rules produce parallel edges.
pub fn build_induced_graph(update: &[ItemId], rules: &[Rule]) -> InducedGraph {
    let mut graph = InducedGraph::new();

    for &item in update {
        graph.add_node(item);
    }

    for &rule in rules {
        if rule.applies_to(|id| graph.contains(id)) {
            graph.add_edge(rule);
        }
    }

    graph
}
