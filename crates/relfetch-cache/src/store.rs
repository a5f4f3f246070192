use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// A directory of cached installer artifacts.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a target file is cached at.
    pub fn entry_path(&self, target: &str) -> PathBuf {
        self.root.join(target)
    }

    /// Make the cache ready to hold `target` and return its path.
    ///
    /// Creates the cache directory if needed, then evicts unrelated entries.
    pub fn prepare(&self, target: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.root).map_err(|source| Error::CreateDir {
            path: self.root.clone(),
            source,
        })?;
        self.evict(target)?;
        Ok(self.entry_path(target))
    }

    /// Remove every file whose name does not contain `target`.
    ///
    /// Substring matching keeps leftovers such as `name.part` from an
    /// interrupted run of the same target. Directories are never removed.
    /// Returns the removed paths.
    pub fn evict(&self, target: &str) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.root).map_err(|source| Error::ReadDir {
            path: self.root.clone(),
            source,
        })?;

        let mut removed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::ReadDir {
                path: self.root.clone(),
                source,
            })?;
            if entry.file_name().to_string_lossy().contains(target) {
                continue;
            }

            let path = entry.path();
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                warn!(path = %path.display(), "skipping directory in installer cache");
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(source) => return Err(Error::Remove { path, source }),
            }

            debug!(path = %path.display(), "evicted stale cache entry");
            removed.push(path);
        }

        Ok(removed)
    }
}

/// Whether `path` is an existing file of exactly `expected_size` bytes.
pub fn is_valid(path: &Path, expected_size: u64) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file() && meta.len() == expected_size)
}

/// Remove a stale or partial entry. Returns whether anything was removed.
pub fn discard(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(Error::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}
