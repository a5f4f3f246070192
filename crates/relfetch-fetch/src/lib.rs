//! Streaming HTTP downloads checked against an expected size.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and types
//! - [`core`] - Pure size and chunk arithmetic
//! - [`effects`] - I/O operations with trait abstraction
//!
//! The only integrity check performed is size equality: the server's
//! `Content-Length` must match the expected size before the body is read,
//! and the file on disk must reach that size afterwards. No content hash is
//! computed.
//!
//! Retry policy and progress rendering belong to the caller.

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use data::{DEFAULT_CHUNK_SIZE, FetchOptions, FetchPhase, Progress, Timeouts};
pub use effects::{BoxStream, Downloader, HttpClient, HttpResponse};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FetchError, Result};
