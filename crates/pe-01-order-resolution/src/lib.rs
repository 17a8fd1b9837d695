//! # PE-01: Order Resolution Subsystem
//!
//! Validates updates against pairwise precedence rules and repairs the
//! ones that are out of order, using Kahn's topological sort over the
//! graph each update induces on the rule set.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (InducedGraph, Resolution, BatchReport), errors, invariants
//! - **Algorithms**: Induced graph builder, Kahn's sort, order resolver
//! - **Ports**: Inbound (OrderResolutionApi)
//! - **Application**: Batch service orchestration
//!
//! ## Example
//!
//! ```
//! use pe_01_order_resolution::{resolve_order, ResolutionStatus, Rule};
//!
//! let rules = vec![Rule::new(97, 75), Rule::new(75, 47)];
//! let resolution = resolve_order(&[75, 97, 47], &rules);
//!
//! assert_eq!(resolution.status, ResolutionStatus::Repaired);
//! assert_eq!(resolution.order, vec![97, 75, 47]);
//! ```

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use algorithms::{build_induced_graph, kahns_topological_sort, resolve_order};
pub use application::service::OrderResolutionService;
pub use config::ResolverConfig;
pub use domain::entities::*;
pub use domain::errors::OrderingError;
pub use domain::value_objects::*;
pub use ports::inbound::OrderResolutionApi;
