//! Ports module for Order Resolution
//!
//! Defines the inbound (API) port trait.

pub mod inbound;

pub use inbound::OrderResolutionApi;
