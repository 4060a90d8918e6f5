//! Storage error types

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage backend errors.
///
/// `Io` covers an unreachable or failing medium and is the only variant a
/// caller may reasonably retry. `Corruption` and `BadHeader` are final:
/// the log is not trusted past the first bad byte.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failure ({context}): {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("log corruption at byte offset {offset}: {reason}")]
    Corruption { offset: u64, reason: String },

    #[error("invalid log header: {reason}")]
    BadHeader { reason: String },

    #[error("record body encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StorageError {
    /// Wraps an I/O error with operation context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        StorageError::Io {
            context: context.into(),
            source,
        }
    }

    /// Builds a corruption error anchored at a byte offset.
    pub fn corruption(offset: u64, reason: impl Into<String>) -> Self {
        StorageError::Corruption {
            offset,
            reason: reason.into(),
        }
    }
}
