//! Algorithms module for Order Resolution
//!
//! Contains:
//! - Induced graph builder
//! - Kahn's topological sort
//! - Order resolver (validate / repair)

pub mod induced_graph;
pub mod kahns;
pub mod resolver;

pub use induced_graph::build_induced_graph;
pub use kahns::kahns_topological_sort;
pub use resolver::{follows_order, resolve_order};
