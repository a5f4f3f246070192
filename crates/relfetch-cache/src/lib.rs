//! Local cache for downloaded installers.
//!
//! The cache directory holds one generation of artifacts: preparing it for a
//! target file name evicts every entry whose name does not contain that file
//! name. An entry is reused when its size on disk equals the expected size.
//! That is the only integrity check; a corrupted file of the right size is
//! accepted.

mod error;
mod store;

pub use error::{Error, Result};
pub use store::{CacheStore, discard, is_valid};
