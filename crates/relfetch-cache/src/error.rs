use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create cache directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to list cache directory {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("failed to remove cache entry {path}: {source}")]
    Remove { path: PathBuf, source: io::Error },
}
