//! JSONL trail writer.
//!
//! Appends `TrailOperation` records to per-day `{trail_dir}/{YYYY-MM-DD}.jsonl`
//! files. Uses `serde_jsonlines::append_json_lines` for single and batched appends.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use gemba_core::trail::TrailOperation;

use crate::error::StoreError;

/// Appends trail operations to per-day JSONL files.
///
/// Every mutation in `AuditService` calls `append()` before the in-memory
/// state changes, so a failed write leaves the state untouched.
pub struct TrailWriter {
    trail_dir: PathBuf,
    enabled: bool,
    write_lock: Mutex<()>,
}

impl TrailWriter {
    /// Create a new `TrailWriter` pointing at the given directory.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory cannot be created.
    pub fn new(trail_dir: PathBuf) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&trail_dir).map_err(|e| StoreError::Other(e.into()))?;
        Ok(Self {
            trail_dir,
            enabled: true,
            write_lock: Mutex::new(()),
        })
    }

    /// Create a disabled writer (for testing or when trail is not needed).
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            trail_dir: PathBuf::new(),
            enabled: false,
            write_lock: Mutex::new(()),
        }
    }

    /// Set whether writing is enabled.
    ///
    /// Disabled during rebuild to avoid re-writing replayed operations.
    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append a trail operation to the file for its day.
    ///
    /// File path: `{trail_dir}/{op.day()}.jsonl`
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file write fails.
    pub fn append(&self, op: &TrailOperation) -> Result<(), StoreError> {
        if !self.enabled {
            return Ok(());
        }

        let path = self.trail_dir.join(format!("{}.jsonl", op.day()));
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Poisoned("trail writer"))?;
        serde_jsonlines::append_json_lines(&path, [op]).map_err(|e| StoreError::Other(e.into()))?;
        tracing::trace!(entity = %op.entity, id = %op.id, op = %op.op, "trail appended");
        Ok(())
    }

    /// Append a batch of operations with one write per day file.
    ///
    /// Operations keep their order. A batch produced by one mutation shares a
    /// timestamp, so it lands in a single file and a single
    /// `append_json_lines` call: either every line is written or the call
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a file write fails.
    pub fn append_all(&self, ops: &[TrailOperation]) -> Result<(), StoreError> {
        if !self.enabled || ops.is_empty() {
            return Ok(());
        }

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Poisoned("trail writer"))?;
        for run in ops.chunk_by(|a, b| a.day() == b.day()) {
            let path = self.trail_dir.join(format!("{}.jsonl", run[0].day()));
            serde_jsonlines::append_json_lines(&path, run).map_err(|e| StoreError::Other(e.into()))?;
        }
        tracing::trace!(operations = ops.len(), "trail batch appended");
        Ok(())
    }

    /// The directory where trail files are stored.
    #[must_use]
    pub fn trail_dir(&self) -> &Path {
        &self.trail_dir
    }
}
