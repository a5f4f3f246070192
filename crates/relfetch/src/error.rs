use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Every way obtaining an installer can fail. None of them is retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Platform(#[from] relfetch_platform::Error),

    #[error(transparent)]
    Resolve(#[from] relfetch_release::ResolveError),

    #[error(transparent)]
    Cache(#[from] relfetch_cache::Error),

    #[error(transparent)]
    Download(#[from] relfetch_fetch::FetchError),

    #[error("release asset URL has no file name: {0}")]
    InvalidAssetUrl(String),

    #[error("failed to read {path}: {source}")]
    ReadArtifact { path: PathBuf, source: io::Error },
}
