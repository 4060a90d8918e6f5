//! Durable append-only file backend
//!
//! One file, `<dir>/todos.log`, fsynced after every append. A mutation is
//! never acknowledged before its frame is durable. The file starts with a
//! fixed header written once by `ensure_schema`; everything after it is a
//! sequence of checksummed frames.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::backend::StorageBackend;
use super::errors::{StorageError, StorageResult};
use super::record::RecordFrame;

/// Log file magic: identifies the format and its version.
const LOG_MAGIC: &[u8; 8] = b"TODODB\x00\x01";

/// Append-only file backend.
///
/// Reopening an existing log continues where the previous instance left
/// off; `load_all` rescans the file so the store can rebuild its state.
#[derive(Debug)]
pub struct FileBackend {
    log_path: PathBuf,
    file: File,
    current_offset: u64,
}

impl FileBackend {
    /// Opens or creates the log file under the given data directory.
    pub fn open(data_dir: &Path) -> StorageResult<Self> {
        if !data_dir.exists() {
            fs::create_dir_all(data_dir).map_err(|e| {
                StorageError::io(
                    format!("create data directory {}", data_dir.display()),
                    e,
                )
            })?;
        }

        let log_path = data_dir.join("todos.log");
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&log_path)
            .map_err(|e| {
                StorageError::io(format!("open log file {}", log_path.display()), e)
            })?;

        let current_offset = file
            .metadata()
            .map_err(|e| StorageError::io("read log metadata", e))?
            .len();

        Ok(Self {
            log_path,
            file,
            current_offset,
        })
    }

    /// Returns the path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.log_path
    }

    /// Returns the current end-of-log byte offset.
    pub fn current_offset(&self) -> u64 {
        self.current_offset
    }

    fn write_durable(&mut self, bytes: &[u8], context: &str) -> StorageResult<()> {
        self.file
            .write_all(bytes)
            .map_err(|e| StorageError::io(context.to_string(), e))?;
        // fsync is mandatory: no acknowledgment before durability
        self.file
            .sync_all()
            .map_err(|e| StorageError::io(format!("fsync after {}", context), e))?;
        self.current_offset += bytes.len() as u64;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn ensure_schema(&mut self) -> StorageResult<()> {
        if self.current_offset == 0 {
            return self.write_durable(LOG_MAGIC, "write log header");
        }

        // Already initialized: the header must match this format version
        let data = fs::read(&self.log_path)
            .map_err(|e| StorageError::io("read log header", e))?;
        if data.len() < LOG_MAGIC.len() || &data[..LOG_MAGIC.len()] != LOG_MAGIC {
            return Err(StorageError::BadHeader {
                reason: format!("{} is not a tododb log", self.log_path.display()),
            });
        }
        Ok(())
    }

    fn append(&mut self, frame: &RecordFrame) -> StorageResult<()> {
        let serialized = frame.serialize();
        self.write_durable(&serialized, "append frame")
    }

    fn load_all(&mut self) -> StorageResult<Vec<RecordFrame>> {
        let data = fs::read(&self.log_path)
            .map_err(|e| StorageError::io("read log file", e))?;

        if data.len() < LOG_MAGIC.len() || &data[..LOG_MAGIC.len()] != LOG_MAGIC {
            return Err(StorageError::BadHeader {
                reason: format!("{} is not a tododb log", self.log_path.display()),
            });
        }

        let mut frames = Vec::new();
        let mut offset = LOG_MAGIC.len();
        while offset < data.len() {
            let (frame, consumed) =
                RecordFrame::deserialize(&data[offset..], offset as u64)?;
            frames.push(frame);
            offset += consumed;
        }

        Ok(frames)
    }
}
