//! Composable boolean predicates over records
//!
//! An explicit sum type rather than a chained builder: the expression tree
//! is visible at the call site and evaluation is a pure function of the
//! record and the relation index.

use crate::relation::RelationIndex;
use crate::store::TodoRecord;

/// A boolean test over one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// The record has a parent.
    HasParent,
    /// At least one record has this record as its parent.
    HasChildren,
    /// The record's text equals the given string exactly.
    TextEquals(String),
    /// Negation of the inner predicate.
    Not(Box<Predicate>),
    /// Conjunction; the empty list is vacuously true.
    And(Vec<Predicate>),
}

impl Predicate {
    /// Wraps a predicate in a negation.
    pub fn not(inner: Predicate) -> Self {
        Predicate::Not(Box::new(inner))
    }

    /// Conjunction of the given predicates.
    pub fn and(predicates: impl Into<Vec<Predicate>>) -> Self {
        Predicate::And(predicates.into())
    }

    /// Exact text equality.
    pub fn text_equals(text: impl Into<String>) -> Self {
        Predicate::TextEquals(text.into())
    }

    /// Evaluates the predicate against one record.
    ///
    /// Relationship variants consult the relation index; an id the index
    /// has never seen simply has no parent and no children.
    pub fn matches(&self, record: &TodoRecord, relations: &RelationIndex) -> bool {
        match self {
            Predicate::HasParent => record.parent_id.is_some(),
            Predicate::HasChildren => relations.has_children(record.id),
            Predicate::TextEquals(expected) => record.text == *expected,
            Predicate::Not(inner) => !inner.matches(record, relations),
            Predicate::And(all) => all.iter().all(|p| p.matches(record, relations)),
        }
    }
}
