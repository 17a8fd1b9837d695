//! # Integration Tests
//!
//! - `flows`: text input through ingest, resolution and the runner
//! - `properties`: resolver guarantees checked through the public API

pub mod properties;
