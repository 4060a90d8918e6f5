//! tododb - a strict, deterministic, embedded todo record store
//!
//! One entity kind, one self-referential parent/child edge, composable
//! query predicates. Storage is an append-only log behind a narrow
//! backend trait.

pub mod executor;
pub mod observability;
pub mod predicate;
pub mod relation;
pub mod storage;
pub mod store;
