//! Error types for Order Resolution

use super::value_objects::ItemId;
use thiserror::Error;

/// All errors that can occur in order resolution
#[derive(Debug, Error)]
pub enum OrderingError {
    /// Cycle detected in an induced graph.
    ///
    /// `partial` holds the items that were ordered before the worklist
    /// ran dry; `unresolved` is the number of items left on the cycle(s).
    #[error("Cycle detected in induced graph: {unresolved} item(s) unresolved")]
    CycleDetected {
        partial: Vec<ItemId>,
        unresolved: usize,
    },

    /// Rule set exceeded limits
    #[error("Rule count exceeded: {count} > {max}")]
    TooManyRules { count: usize, max: usize },

    /// Update exceeded limits
    #[error("Update {index} too large: {len} > {max}")]
    UpdateTooLarge { index: usize, len: usize, max: usize },

    /// Strict cycle policy: some updates could not be ordered
    #[error("Cyclic constraints in {} update(s): {indices:?}", .indices.len())]
    CyclicUpdates { indices: Vec<usize> },

    /// A middle-item sum left the `i64` range
    #[error("Middle-item sum overflowed at update {index}")]
    SumOverflow { index: usize },
}

impl OrderingError {
    /// Items placed before a cycle stopped the sort
    pub fn into_partial_order(self) -> Option<Vec<ItemId>> {
        match self {
            OrderingError::CycleDetected { partial, .. } => Some(partial),
            _ => None,
        }
    }
}
