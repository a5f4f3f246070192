//! Locate the installer asset of a project's latest release.
//!
//! - [`data`] - Release metadata wire types and the endpoint description
//! - [`core`] - Asset selection and download URL derivation
//! - [`AssetResolver`] - Fetches the metadata and applies the selection

pub mod core;
pub mod data;
mod error;
mod resolver;

pub use data::{AssetInfo, ReleaseEndpoint, ReleaseMetadata, ResolvedAsset};
pub use error::{ResolveError, Result};
pub use resolver::AssetResolver;
