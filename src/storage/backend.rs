//! Storage backend trait and the in-memory backend
//!
//! The backend is the narrow seam between the record store and whatever
//! persistence medium backs it. The store never touches files or buffers
//! directly; it appends frames and replays them on open.

use super::errors::StorageResult;
use super::record::RecordFrame;

/// A persistence medium for the record log.
pub trait StorageBackend {
    /// One-time schema setup, run before the first read or write.
    ///
    /// Must be idempotent: opening an already-initialized medium is a no-op.
    fn ensure_schema(&mut self) -> StorageResult<()>;

    /// Appends one frame to the log. Durable on return for durable media.
    fn append(&mut self, frame: &RecordFrame) -> StorageResult<()>;

    /// Returns every frame in append order.
    fn load_all(&mut self) -> StorageResult<Vec<RecordFrame>>;
}

/// Volatile backend holding the log in memory.
///
/// The moral equivalent of the in-memory database mode of an embedded SQL
/// engine: full log semantics, no durability.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    frames: Vec<RecordFrame>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames appended so far.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl StorageBackend for MemoryBackend {
    fn ensure_schema(&mut self) -> StorageResult<()> {
        Ok(())
    }

    fn append(&mut self, frame: &RecordFrame) -> StorageResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn load_all(&mut self) -> StorageResult<Vec<RecordFrame>> {
        Ok(self.frames.clone())
    }
}
