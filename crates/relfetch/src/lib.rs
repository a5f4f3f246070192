//! Release-fetching installer helper.
//!
//! Resolves the installer asset of a project's latest release for a
//! platform, keeps it in a one-generation local cache and hands back the
//! artifact. See [`Pipeline`] for the flow.

pub mod config;
mod error;
mod pipeline;
pub mod ui;

pub use error::{PipelineError, Result};
pub use pipeline::{Artifact, Pipeline};
