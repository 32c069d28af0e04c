//! Named, byte-oriented artifact storage.
//!
//! [`FsArtifactStore`] keeps one file per artifact in a directory and writes
//! through a temp file plus rename. [`MemoryArtifactStore`] stamps writes with
//! a [`Clock`] and counts accesses, which the pipeline tests rely on.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::Clock;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("invalid artifact name: {0:?}")]
    InvalidName(String),
    #[error("directory missing or not writable: {0}")]
    Directory(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub trait ArtifactStore: Send + Sync {
    /// Last modification time, or `None` when the artifact does not exist.
    fn modified(&self, name: &str) -> Result<Option<DateTime<Utc>>, StoreError>;

    /// Full contents of the artifact.
    fn read(&self, name: &str) -> Result<Vec<u8>, StoreError>;

    /// Replaces the artifact with `content`.
    fn write(&self, name: &str, content: &[u8]) -> Result<(), StoreError>;
}

/// Ensure directory exists; create if missing.
pub fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| StoreError::Directory(e.to_string()))?;
        if !meta.is_dir() {
            return Err(StoreError::Directory("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| StoreError::Directory(e.to_string()))?;
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if bad {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    dir: PathBuf,
}

impl FsArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_of(&self, name: &str) -> Result<PathBuf, StoreError> {
        validate_name(name)?;
        Ok(self.dir.join(name))
    }
}

impl ArtifactStore for FsArtifactStore {
    fn modified(&self, name: &str) -> Result<Option<DateTime<Utc>>, StoreError> {
        let path = self.path_of(name)?;
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok(Some(DateTime::<Utc>::from(meta.modified()?))),
            Ok(_) => Ok(None),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.path_of(name)?;
        fs::read(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(name.to_string()),
            _ => StoreError::Io(err),
        })
    }

    fn write(&self, name: &str, content: &[u8]) -> Result<(), StoreError> {
        let target = self.path_of(name)?;
        ensure_dir(&self.dir)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(&target).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct MemoryEntry {
    content: Vec<u8>,
    modified: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct MemoryState {
    entries: HashMap<String, MemoryEntry>,
    reads: usize,
    writes: usize,
}

/// In-memory store. Clones share the same contents and counters.
#[derive(Clone)]
pub struct MemoryArtifactStore {
    state: Arc<Mutex<MemoryState>>,
    clock: Arc<dyn Clock>,
}

impl MemoryArtifactStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState::default())),
            clock,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Seeds an artifact with an explicit modification time without counting a write.
    pub fn insert_at(&self, name: &str, content: impl Into<Vec<u8>>, modified: DateTime<Utc>) {
        self.lock().entries.insert(
            name.to_string(),
            MemoryEntry {
                content: content.into(),
                modified,
            },
        );
    }

    /// Contents as text, if present.
    pub fn get_text(&self, name: &str) -> Option<String> {
        self.lock()
            .entries
            .get(name)
            .map(|entry| String::from_utf8_lossy(&entry.content).into_owned())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().entries.contains_key(name)
    }

    pub fn read_count(&self) -> usize {
        self.lock().reads
    }

    pub fn write_count(&self) -> usize {
        self.lock().writes
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn modified(&self, name: &str) -> Result<Option<DateTime<Utc>>, StoreError> {
        validate_name(name)?;
        Ok(self.lock().entries.get(name).map(|entry| entry.modified))
    }

    fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        validate_name(name)?;
        let mut state = self.lock();
        state.reads += 1;
        state
            .entries
            .get(name)
            .map(|entry| entry.content.clone())
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn write(&self, name: &str, content: &[u8]) -> Result<(), StoreError> {
        validate_name(name)?;
        let modified = self.clock.now();
        let mut state = self.lock();
        state.writes += 1;
        state.entries.insert(
            name.to_string(),
            MemoryEntry {
                content: content.to_vec(),
                modified,
            },
        );
        Ok(())
    }
}
