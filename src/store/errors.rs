//! Record store error types

use thiserror::Error;

use super::record::RecordId;
use crate::storage::StorageError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors.
///
/// All variants except `StorageUnavailable` are programming or data
/// errors and are never worth retrying.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record {id} not found")]
    NotFound { id: RecordId },

    #[error("record {id} references missing parent {parent_id}")]
    ReferentialIntegrity { id: RecordId, parent_id: RecordId },

    #[error("record {id} cannot be its own parent")]
    InvalidRelationship { id: RecordId },

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),
}
