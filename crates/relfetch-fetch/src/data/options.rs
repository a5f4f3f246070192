use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Largest slice written to disk between two progress reports.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Phases of a download operation.
///
/// Downloads progress through these phases in order:
/// Connecting → Downloading → Verifying → Completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// Request sent, waiting for response headers.
    #[default]
    Connecting,

    /// Streaming the body to disk.
    Downloading,

    /// Comparing the size on disk with the expected size.
    Verifying,

    /// Terminal state for successful downloads.
    Completed,
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchPhase::Connecting => write!(f, "Connecting"),
            FetchPhase::Downloading => write!(f, "Downloading"),
            FetchPhase::Verifying => write!(f, "Verifying"),
            FetchPhase::Completed => write!(f, "Completed"),
        }
    }
}

/// Connection timeouts applied by the HTTP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Time allowed to establish the connection.
    pub connect: Duration,
    /// Time allowed between two reads of the response.
    pub read:    Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(30),
            read:    Duration::from_secs(60),
        }
    }
}

/// Configuration for a [`Downloader`](crate::Downloader).
///
/// # Examples
///
/// ```
/// use relfetch_fetch::FetchOptions;
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let options = FetchOptions::default()
///     .chunk_size(4096)
///     .header("Accept", "application/octet-stream")
///     .cancel_token(token.clone());
/// assert_eq!(options.chunk_size, 4096);
/// ```
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Custom HTTP headers sent with the download request.
    ///
    /// Default: empty
    pub headers: Arc<[(String, String)]>,

    /// Maximum number of bytes written between two progress callbacks.
    ///
    /// Default: [`DEFAULT_CHUNK_SIZE`]
    pub chunk_size: usize,

    /// Checked between chunk reads; cancelling aborts the download and
    /// removes the partial file.
    pub cancel: CancellationToken,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            headers:    Arc::new([]),
            chunk_size: DEFAULT_CHUNK_SIZE,
            cancel:     CancellationToken::new(),
        }
    }
}

impl FetchOptions {
    /// Add a single custom HTTP header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers: Vec<_> = self.headers.iter().cloned().collect();
        headers.push((key.into(), value.into()));
        self.headers = Arc::from(headers);
        self
    }

    /// Set the write chunk size. Zero is treated as one.
    #[must_use]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Use a caller-owned cancellation token.
    #[must_use]
    pub fn cancel_token(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}
