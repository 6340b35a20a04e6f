use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::Reading;
use crate::ports::ReadingStore;

use super::memory::MemoryStore;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Bounded store mirrored to a JSON snapshot file.
///
/// The in-memory deque remains the source of truth; every mutation
/// rewrites the file as a full JSON array of readings. A write failure
/// is logged and the in-memory state proceeds untouched, so a broken
/// disk never fails a request. On startup a missing or corrupt
/// snapshot is treated as an empty log.
pub struct FileStore {
    inner: MemoryStore,
    path: PathBuf,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>, max_logs: usize) -> Self {
        let path = path.into();
        let inner = MemoryStore::new(max_logs);

        match load_snapshot(&path) {
            Ok(readings) => {
                if !readings.is_empty() {
                    info!("Loaded {} readings from {}", readings.len(), path.display());
                }
                inner.replace_all(readings);
            }
            Err(e) => {
                warn!(
                    "Ignoring unreadable snapshot {}: {}. Starting with an empty log.",
                    path.display(),
                    e
                );
            }
        }

        Self { inner, path }
    }

    fn persist(&self) {
        if let Err(e) = write_snapshot(&self.path, &self.inner.all()) {
            error!("Failed to persist snapshot to {}: {}", self.path.display(), e);
        }
    }
}

impl ReadingStore for FileStore {
    fn append(&self, reading: Reading) {
        self.inner.append(reading);
        self.persist();
    }

    fn latest(&self) -> Option<Reading> {
        self.inner.latest()
    }

    fn recent(&self, limit: usize) -> Vec<Reading> {
        self.inner.recent(limit)
    }

    fn all(&self) -> Vec<Reading> {
        self.inner.all()
    }

    fn clear(&self) {
        self.inner.clear();
        self.persist();
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

fn load_snapshot(path: &Path) -> Result<Vec<Reading>, SnapshotError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn write_snapshot(path: &Path, readings: &[Reading]) -> Result<(), SnapshotError> {
    let json = serde_json::to_vec_pretty(readings)?;
    fs::write(path, json)?;
    Ok(())
}
