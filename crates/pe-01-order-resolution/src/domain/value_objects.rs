//! Value objects for Order Resolution
//!
//! Identifiers, precedence rules and resolution outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item identifier as it appears in rules and updates
pub type ItemId = i64;

/// Precedence rule: `before` must occur earlier than `after`
/// in any update containing both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    /// Item that must come first
    pub before: ItemId,
    /// Item that must come later
    pub after: ItemId,
}

impl Rule {
    pub fn new(before: ItemId, after: ItemId) -> Self {
        Self { before, after }
    }

    /// True if both endpoints satisfy `contains`
    pub fn applies_to(&self, contains: impl Fn(ItemId) -> bool) -> bool {
        contains(self.before) && contains(self.after)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.before, self.after)
    }
}

/// Outcome of resolving one update
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    /// Update already follows the computed order
    Valid,
    /// Update was out of order; the order is the canonical repair
    Repaired,
    /// Relevant rules form a cycle; the order is partial
    Cyclic,
}

impl ResolutionStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, ResolutionStatus::Valid)
    }
}

/// Middle element by position (`items[len / 2]`).
///
/// Returns `None` for an empty slice.
pub fn middle_item(items: &[ItemId]) -> Option<ItemId> {
    items.get(items.len() / 2).copied()
}
