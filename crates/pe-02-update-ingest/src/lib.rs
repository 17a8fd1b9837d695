//! # PE-02: Update Ingest
//!
//! Turns the textual rule/update format into the in-memory values the
//! order resolver consumes. Every malformed line is rejected here, with
//! its line number, so nothing malformed reaches PE-01.
//!
//! Updates that repeat an item are rejected as malformed.

pub mod errors;
pub mod parser;

pub use errors::{IngestError, LineError};
pub use parser::{load_input, parse_input, parse_rule, parse_update, UpdateManifest};
