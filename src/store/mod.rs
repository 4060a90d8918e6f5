//! Record Store subsystem for tododb
//!
//! The store owns every record, assigns ids, and is the only component
//! that writes to the storage backend. Mutations are write-through:
//! the frame is durable before the in-memory state changes.
//!
//! # Invariants
//!
//! - Ids are assigned sequentially from 1 and never reused
//! - Every persisted parent reference points at an existing record
//! - A record is never its own parent
//! - `all()` iterates in ascending id order

mod errors;
mod record;
mod store;

pub use errors::{StoreError, StoreResult};
pub use record::{RecordId, TodoRecord};
pub use store::TodoStore;
