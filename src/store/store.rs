//! The record store
//!
//! Mutation flow (strict order):
//!
//! 1. Validate against in-memory state
//! 2. Append the new record state to the storage backend (durable)
//! 3. Apply the change to the in-memory map and relation index
//!
//! A mutation that fails in step 2 leaves the in-memory state untouched,
//! so an external observer never sees a partially-applied change.

use std::collections::BTreeMap;

use crate::observability::Logger;
use crate::relation::RelationIndex;
use crate::storage::StorageBackend;

use super::errors::{StoreError, StoreResult};
use super::record::{RecordId, TodoRecord};

/// The record store. Owns every record and the storage backend.
///
/// An explicitly passed handle: callers hold the store, not a global
/// connection. Mutations take `&mut self`, reads take `&self`, which
/// serializes all writes per instance.
#[derive(Debug)]
pub struct TodoStore<B: StorageBackend> {
    backend: B,
    records: BTreeMap<RecordId, TodoRecord>,
    relations: RelationIndex,
    next_id: RecordId,
}

impl<B: StorageBackend> TodoStore<B> {
    /// Opens a store over the given backend.
    ///
    /// Runs the one-time schema step, replays the log (latest frame per
    /// record id wins), rebuilds the relation index, and validates that
    /// every parent reference resolves.
    pub fn open(mut backend: B) -> StoreResult<Self> {
        backend.ensure_schema()?;

        let mut records: BTreeMap<RecordId, TodoRecord> = BTreeMap::new();
        for frame in backend.load_all()? {
            let record = TodoRecord::from_frame(&frame)?;
            // Latest state wins, in append order
            records.insert(record.id, record);
        }

        let mut relations = RelationIndex::new();
        for record in records.values() {
            if let Some(parent_id) = record.parent_id {
                if !records.contains_key(&parent_id) {
                    return Err(StoreError::ReferentialIntegrity {
                        id: record.id,
                        parent_id,
                    });
                }
                relations.link(record.id, parent_id);
            }
        }

        let next_id = records.keys().next_back().map_or(1, |max| max + 1);

        Logger::info(
            "STORE_OPENED",
            &[("records", &records.len().to_string())],
        );

        Ok(Self {
            backend,
            records,
            relations,
            next_id,
        })
    }

    /// Creates a record with the next sequential id and no parent.
    pub fn create(&mut self, text: impl Into<String>) -> StoreResult<TodoRecord> {
        let record = TodoRecord::new(self.next_id, text);
        self.persist(&record)?;

        self.next_id += 1;
        self.records.insert(record.id, record.clone());

        Logger::info("RECORD_CREATED", &[("id", &record.id.to_string())]);
        Ok(record)
    }

    /// Returns the record with the given id.
    pub fn get(&self, id: RecordId) -> StoreResult<&TodoRecord> {
        self.records.get(&id).ok_or(StoreError::NotFound { id })
    }

    /// Replaces the text of an existing record.
    pub fn update_text(&mut self, id: RecordId, text: impl Into<String>) -> StoreResult<()> {
        let mut updated = self.get(id)?.clone();
        updated.text = text.into();

        self.persist(&updated)?;
        self.records.insert(id, updated);
        Ok(())
    }

    /// Makes `parent_id` the parent of `child_id`, re-parenting if the
    /// child already had one.
    pub fn set_parent(&mut self, child_id: RecordId, parent_id: RecordId) -> StoreResult<()> {
        if child_id == parent_id {
            return Err(StoreError::InvalidRelationship { id: child_id });
        }
        if !self.records.contains_key(&parent_id) {
            return Err(StoreError::NotFound { id: parent_id });
        }
        let mut updated = self.get(child_id)?.clone();
        updated.parent_id = Some(parent_id);

        self.persist(&updated)?;
        self.records.insert(child_id, updated);
        self.relations.link(child_id, parent_id);

        Logger::info(
            "PARENT_LINKED",
            &[
                ("child", &child_id.to_string()),
                ("parent", &parent_id.to_string()),
            ],
        );
        Ok(())
    }

    /// Clears the parent of a record. No-op if it has none.
    pub fn clear_parent(&mut self, id: RecordId) -> StoreResult<()> {
        let mut updated = self.get(id)?.clone();
        if updated.parent_id.is_none() {
            return Ok(());
        }
        updated.parent_id = None;

        self.persist(&updated)?;
        self.records.insert(id, updated);
        self.relations.unlink(id);

        Logger::info("PARENT_CLEARED", &[("id", &id.to_string())]);
        Ok(())
    }

    /// Iterates every record in ascending id order.
    ///
    /// Restartable: repeated calls between mutations yield identical
    /// sequences.
    pub fn all(&self) -> impl Iterator<Item = &TodoRecord> {
        self.records.values()
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The derived parent/child adjacency.
    pub fn relations(&self) -> &RelationIndex {
        &self.relations
    }

    /// Filters the store with the given predicates (implicit AND) and
    /// returns matches in ascending id order.
    pub fn query(
        &self,
        predicates: &[crate::predicate::Predicate],
    ) -> StoreResult<Vec<TodoRecord>> {
        let result = crate::executor::QueryExecutor::new(self).execute(predicates)?;
        Ok(result.records)
    }

    /// Consumes the store, returning the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn persist(&mut self, record: &TodoRecord) -> StoreResult<()> {
        let frame = record.to_frame()?;
        if let Err(e) = self.backend.append(&frame) {
            Logger::error(
                "STORAGE_APPEND_FAILED",
                &[("id", &record.id.to_string()), ("error", &e.to_string())],
            );
            return Err(e.into());
        }
        Ok(())
    }
}
