//! Storage subsystem for tododb
//!
//! The storage backend holds the canonical persistent state of all todo
//! records as an append-only log of full record states.
//!
//! # Design Principles
//!
//! - Append-only (no in-place updates)
//! - Checksum-verified on every read
//! - Latest frame wins for the same record id
//! - Mutations hit storage before in-memory state
//!
//! # Invariants Enforced
//!
//! - Every frame carries a CRC32 checksum
//! - Any checksum or framing failure aborts the open (halt-on-corruption)
//! - The schema header is written exactly once, before the first frame

mod backend;
mod checksum;
mod errors;
mod file;
mod record;

pub use backend::{MemoryBackend, StorageBackend};
pub use checksum::{compute_checksum, verify_checksum};
pub use errors::{StorageError, StorageResult};
pub use file::FileBackend;
pub use record::RecordFrame;
