//! # Precedence-Engine Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Reference rule set and updates with known sums
//! ├── workloads.rs      # Seeded random workloads (tests + benches)
//! └── integration/      # Cross-crate flows: ingest → resolve → report
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p pe-tests
//!
//! # Benchmarks
//! cargo bench -p pe-tests
//! ```

pub mod fixtures;
pub mod integration;
