//! Predicate Engine subsystem for tododb
//!
//! Predicates are immutable, side-effect-free boolean expressions over a
//! single record, combinable by construction. Matching is strict: exact
//! text equality, no coercion.

mod predicate;

pub use predicate::Predicate;
