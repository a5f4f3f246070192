//! Error types for relfetch-fetch.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("size mismatch: expected {expected} bytes, server reported {}", reported_len(.reported))]
    SizeMismatch { expected: u64, reported: Option<u64> },

    #[error("incomplete download: got {written} of {expected} bytes, try again later")]
    Incomplete { expected: u64, written: u64 },

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("download cancelled")]
    Cancelled,

    #[error("file I/O error: {0}")]
    Io(#[from] io::Error),
}

fn reported_len(reported: &Option<u64>) -> String {
    match reported {
        Some(len) => len.to_string(),
        None => "no Content-Length".to_string(),
    }
}
