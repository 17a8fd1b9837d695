//! Core entities for Order Resolution

use super::errors::OrderingError;
use super::value_objects::{middle_item, ItemId, ResolutionStatus, Rule};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Precedence graph induced by one update.
///
/// Nodes are the update's items in first-seen order; edges are the rules
/// whose both endpoints are members. Built fresh for every resolution.
#[derive(Debug, Clone, Default)]
pub struct InducedGraph {
    /// Member items in first-seen order
    pub nodes: Vec<ItemId>,
    /// Position of each member in `nodes`
    pub index: HashMap<ItemId, usize>,
    /// Relevant rules, in rule-set order
    pub edges: Vec<Rule>,
    /// Adjacency list by node position: from -> [to, to, ...]
    pub adjacency: Vec<Vec<usize>>,
    /// In-degree count by node position
    pub in_degree: Vec<usize>,
}

impl InducedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member item. Returns false if it was already present.
    pub fn add_node(&mut self, id: ItemId) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id, self.nodes.len());
        self.nodes.push(id);
        self.adjacency.push(Vec::new());
        self.in_degree.push(0);
        true
    }

    /// Add a rule as an edge. Returns false (and adds nothing) unless both
    /// endpoints are members.
    pub fn add_edge(&mut self, rule: Rule) -> bool {
        let (Some(&from), Some(&to)) = (self.index.get(&rule.before), self.index.get(&rule.after))
        else {
            return false;
        };

        self.adjacency[from].push(to);
        self.in_degree[to] += 1;
        self.edges.push(rule);
        true
    }

    /// Check membership
    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Position of an item in first-seen order
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Check if an edge exists from -> to
    pub fn has_edge(&self, from: ItemId, to: ItemId) -> bool {
        match (self.position_of(from), self.position_of(to)) {
            (Some(from), Some(to)) => self.adjacency[from].contains(&to),
            _ => false,
        }
    }

    /// Direct successors of an item, one entry per edge
    pub fn successors(&self, id: ItemId) -> Vec<ItemId> {
        self.position_of(id)
            .map(|pos| self.adjacency[pos].iter().map(|&to| self.nodes[to]).collect())
            .unwrap_or_default()
    }

    /// Positions of zero in-degree nodes, in first-seen order
    pub fn get_zero_degree_nodes(&self) -> Vec<usize> {
        self.in_degree
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree == 0)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Result of resolving one update against the rule set
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The update itself when valid, the canonical repair when repaired,
    /// a partial order when cyclic
    pub order: Vec<ItemId>,
    /// Outcome classification
    pub status: ResolutionStatus,
}

impl Resolution {
    pub fn valid(order: Vec<ItemId>) -> Self {
        Self {
            order,
            status: ResolutionStatus::Valid,
        }
    }

    pub fn repaired(order: Vec<ItemId>) -> Self {
        Self {
            order,
            status: ResolutionStatus::Repaired,
        }
    }

    pub fn cyclic(partial: Vec<ItemId>) -> Self {
        Self {
            order: partial,
            status: ResolutionStatus::Cyclic,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    pub fn is_cyclic(&self) -> bool {
        self.status == ResolutionStatus::Cyclic
    }

    /// The order, unless it is a partial order from a cyclic update
    pub fn canonical_order(&self) -> Option<&[ItemId]> {
        if self.is_cyclic() {
            None
        } else {
            Some(&self.order)
        }
    }

    /// Middle item of the canonical order
    pub fn middle(&self) -> Option<ItemId> {
        self.canonical_order().and_then(middle_item)
    }
}

/// Per-update line of a batch report
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    /// Position of the update in the batch
    pub index: usize,
    /// Outcome classification
    pub status: ResolutionStatus,
    /// Middle item of the update (valid) or of the repair (repaired)
    pub middle: Option<ItemId>,
}

/// Aggregated results for a batch of updates
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Sum of middle items over originally-valid updates
    pub valid_middle_sum: i64,
    /// Sum of middle items over repaired orders
    pub repaired_middle_sum: i64,
    pub valid_count: usize,
    pub repaired_count: usize,
    /// Indices of updates whose relevant rules form a cycle
    pub cyclic_updates: Vec<usize>,
    /// One entry per update, in batch order
    pub outcomes: Vec<UpdateOutcome>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one resolution into the report.
    ///
    /// Cyclic updates are excluded from both sums. Fails with
    /// `SumOverflow` if a sum would leave the `i64` range; the report is
    /// left unchanged in that case.
    pub fn record(&mut self, index: usize, resolution: &Resolution) -> Result<(), OrderingError> {
        let middle = resolution.middle();
        let add = |sum: i64| {
            sum.checked_add(middle.unwrap_or(0))
                .ok_or(OrderingError::SumOverflow { index })
        };

        match resolution.status {
            ResolutionStatus::Valid => {
                self.valid_middle_sum = add(self.valid_middle_sum)?;
                self.valid_count += 1;
            }
            ResolutionStatus::Repaired => {
                self.repaired_middle_sum = add(self.repaired_middle_sum)?;
                self.repaired_count += 1;
            }
            ResolutionStatus::Cyclic => self.cyclic_updates.push(index),
        }

        self.outcomes.push(UpdateOutcome {
            index,
            status: resolution.status,
            middle,
        });

        Ok(())
    }

    /// Total updates recorded
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}
