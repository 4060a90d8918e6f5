//! Relationship Index subsystem for tododb
//!
//! The parent/child adjacency is derived, in-memory-only state rebuilt
//! from storage on open. The record store is the source of truth; the
//! index only mirrors it.
//!
//! # Invariants
//!
//! - A record has at most one parent
//! - Index updates occur after the storage write
//! - `children_of` iterates in ascending id order (BTreeSet)

mod index;

pub use index::RelationIndex;
