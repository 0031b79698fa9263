//! Durable storage for the lock snapshot.

use super::types::LockerState;
use crate::error::{LockerError, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Load and save the full lock snapshot.
///
/// Implementations hold no cache and take no locks of their own; the worker
/// that owns the store is what serializes access to it.
pub trait LockStore: Send + 'static {
    /// Read the full snapshot.
    fn load(&self) -> Result<LockerState>;

    /// Replace the stored snapshot with `state`.
    fn save(&self, state: &LockerState) -> Result<()>;
}

/// Lock snapshot kept as a pretty-printed JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileLockStore {
    path: PathBuf,
}

impl FileLockStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the document as an empty snapshot if it does not exist yet.
    ///
    /// An existing document is left untouched, whatever its contents.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        fs::write(&self.path, b"{}").map_err(|e| {
            LockerError::Io(format!(
                "Unable to create LOCKER_CONFIG file ({}): {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::info!(path = %self.path.display(), "Created empty lock state file");
        Ok(())
    }
}

impl LockStore for FileLockStore {
    /// An empty file is an empty snapshot, not an error.
    fn load(&self) -> Result<LockerState> {
        let data = fs::read(&self.path).map_err(|e| {
            LockerError::Io(format!(
                "failed to read lock state '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        if data.is_empty() {
            return Ok(LockerState::new());
        }

        serde_json::from_slice(&data).map_err(|e| {
            LockerError::Decode(format!(
                "failed to parse lock state '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, state: &LockerState) -> Result<()> {
        let mut data = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
        state.serialize(&mut serializer).map_err(|e| {
            LockerError::Io(format!(
                "failed to encode lock state for '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        fs::write(&self.path, data).map_err(|e| {
            LockerError::Io(format!(
                "failed to write lock state '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}
