//! Todo record type

use serde::{Deserialize, Serialize};

use crate::storage::{RecordFrame, StorageResult};

/// Record identifier. Positive, sequential from 1, never reused.
pub type RecordId = u64;

/// One todo record.
///
/// `id` is immutable once assigned; `text` and `parent_id` are mutated
/// through the store only, so every state change is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: RecordId,
    pub text: String,
    pub parent_id: Option<RecordId>,
}

impl TodoRecord {
    /// Creates a fresh record with no parent.
    pub fn new(id: RecordId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            parent_id: None,
        }
    }

    /// Encodes the full record state into a log frame.
    pub fn to_frame(&self) -> StorageResult<RecordFrame> {
        let body = serde_json::to_vec(self)?;
        Ok(RecordFrame::new(self.id, body))
    }

    /// Decodes a record state from a log frame body.
    pub fn from_frame(frame: &RecordFrame) -> StorageResult<Self> {
        let record: TodoRecord = serde_json::from_slice(&frame.body)?;
        Ok(record)
    }
}
