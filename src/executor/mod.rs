//! Query Executor subsystem for tododb
//!
//! The executor consumes predicates and produces deterministic results.
//!
//! # Execution Flow (strict order)
//!
//! 1. Scan every record in ascending id order
//! 2. Evaluate all predicates against each record (AND semantics)
//! 3. Return matches in scan order
//!
//! Read-only: the executor borrows the store and never mutates it.

mod executor;

pub use executor::{QueryExecutor, QueryResult};
