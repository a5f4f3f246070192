//! Immutable data types for download operations.

pub mod options;
pub mod progress;

pub use options::{DEFAULT_CHUNK_SIZE, FetchOptions, FetchPhase, Timeouts};
pub use progress::Progress;
