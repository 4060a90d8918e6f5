//! Observability subsystem for tododb
//!
//! Structured, synchronous logging with no effect on execution:
//! one JSON line per event, deterministic field ordering, no buffering.

mod logger;

pub use logger::{Logger, Severity};
