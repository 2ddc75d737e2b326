//! Snapshot persistence seam
//!
//! The engine never reads or writes storage; callers inject a store and
//! hand the loaded snapshot to the pure functions.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use super::UserSnapshot;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Repository interface for loading and saving the user snapshot
pub trait SnapshotStore {
    fn load(&self) -> Result<UserSnapshot, StoreError>;
    fn save(&self, snapshot: &UserSnapshot) -> Result<(), StoreError>;
}

/// JSON file-backed store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    /// Load the snapshot; a missing file yields an empty snapshot so a
    /// first run starts from a clean slate
    fn load(&self) -> Result<UserSnapshot, StoreError> {
        if !self.path.exists() {
            debug!("no snapshot at {}, starting empty", self.path.display());
            return Ok(UserSnapshot::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, snapshot: &UserSnapshot) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, contents)?;
        debug!("saved snapshot to {}", self.path.display());
        Ok(())
    }
}
