//! Log frame format
//!
//! Each mutation appends one frame holding the full state of one record:
//!
//! ```text
//! +------------------+
//! | Frame Length     | (u32 LE, includes this field and the checksum)
//! +------------------+
//! | Record ID        | (u64 LE)
//! +------------------+
//! | Body             | (length-prefixed bytes, JSON record state)
//! +------------------+
//! | Checksum         | (u32 LE)
//! +------------------+
//! ```
//!
//! Checksum covers all bytes except the checksum itself.

use super::checksum::compute_checksum;
use super::errors::{StorageError, StorageResult};

/// Minimum size of a valid frame: length + record id + empty body + checksum.
const MIN_FRAME_SIZE: usize = 4 + 8 + 4 + 4;

/// One persisted record state.
///
/// The body is opaque to the storage layer; the record store encodes and
/// decodes it. Multiple frames for the same record id may exist in a log;
/// the latest frame wins on replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFrame {
    /// The record this frame belongs to
    pub record_id: u64,
    /// Serialized record state (serde_json)
    pub body: Vec<u8>,
}

impl RecordFrame {
    /// Creates a frame for the given record id and body.
    pub fn new(record_id: u64, body: Vec<u8>) -> Self {
        Self { record_id, body }
    }

    /// Serializes the complete frame to bytes.
    pub fn serialize(&self) -> Vec<u8> {
        let frame_length = (MIN_FRAME_SIZE + self.body.len()) as u32;

        let mut frame = Vec::with_capacity(frame_length as usize);
        frame.extend_from_slice(&frame_length.to_le_bytes());
        frame.extend_from_slice(&self.record_id.to_le_bytes());
        frame.extend_from_slice(&(self.body.len() as u32).to_le_bytes());
        frame.extend_from_slice(&self.body);

        let checksum = compute_checksum(&frame);
        frame.extend_from_slice(&checksum.to_le_bytes());

        frame
    }

    /// Deserializes one frame from the front of `data`, verifying checksum.
    ///
    /// `base_offset` is the byte position of `data[0]` in the log, used to
    /// anchor corruption errors. Returns the frame and the bytes consumed.
    pub fn deserialize(data: &[u8], base_offset: u64) -> StorageResult<(Self, usize)> {
        if data.len() < MIN_FRAME_SIZE {
            return Err(StorageError::corruption(
                base_offset,
                format!("truncated frame: {} bytes", data.len()),
            ));
        }

        let frame_length =
            u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
        if frame_length < MIN_FRAME_SIZE {
            return Err(StorageError::corruption(
                base_offset,
                format!("invalid frame length {}", frame_length),
            ));
        }
        if data.len() < frame_length {
            return Err(StorageError::corruption(
                base_offset,
                format!(
                    "truncated frame: expected {} bytes, got {}",
                    frame_length,
                    data.len()
                ),
            ));
        }

        let checksum_offset = frame_length - 4;
        let stored_checksum = u32::from_le_bytes([
            data[checksum_offset],
            data[checksum_offset + 1],
            data[checksum_offset + 2],
            data[checksum_offset + 3],
        ]);
        let computed = compute_checksum(&data[..checksum_offset]);
        if computed != stored_checksum {
            return Err(StorageError::corruption(
                base_offset,
                format!(
                    "checksum mismatch: computed {:08x}, stored {:08x}",
                    computed, stored_checksum
                ),
            ));
        }

        let record_id = u64::from_le_bytes([
            data[4], data[5], data[6], data[7], data[8], data[9], data[10], data[11],
        ]);

        let body_len =
            u32::from_le_bytes([data[12], data[13], data[14], data[15]]) as usize;
        if 16 + body_len != checksum_offset {
            return Err(StorageError::corruption(
                base_offset,
                format!("body length {} inconsistent with frame length", body_len),
            ));
        }
        let body = data[16..16 + body_len].to_vec();

        Ok((Self { record_id, body }, frame_length))
    }
}
