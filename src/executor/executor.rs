//! Query execution over the record store

use crate::predicate::Predicate;
use crate::storage::StorageBackend;
use crate::store::{StoreResult, TodoRecord, TodoStore};

/// Outcome of one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// Records scanned (always the full store in this core)
    pub scanned: usize,
    /// Matching records in ascending id order
    pub records: Vec<TodoRecord>,
}

impl QueryResult {
    /// Number of records returned.
    pub fn returned(&self) -> usize {
        self.records.len()
    }
}

/// Executes predicate queries against a store.
///
/// Deterministic: same predicates + same store state = same results.
pub struct QueryExecutor<'a, B: StorageBackend> {
    store: &'a TodoStore<B>,
}

impl<'a, B: StorageBackend> QueryExecutor<'a, B> {
    pub fn new(store: &'a TodoStore<B>) -> Self {
        Self { store }
    }

    /// Runs the query. All predicates must match (implicit AND); an empty
    /// predicate set matches every record. An empty result is a valid
    /// outcome, never an error.
    pub fn execute(&self, predicates: &[Predicate]) -> StoreResult<QueryResult> {
        let relations = self.store.relations();

        let mut scanned = 0;
        let mut records = Vec::new();
        for record in self.store.all() {
            scanned += 1;
            if predicates.iter().all(|p| p.matches(record, relations)) {
                records.push(record.clone());
            }
        }

        Ok(QueryResult { scanned, records })
    }
}
