//! Platform description for release asset selection.
//!
//! The descriptor is built once at startup (usually with
//! [`PlatformDescriptor::detect`]) and passed explicitly to everything that
//! needs to know which installer flavour to pick.

pub use error::{Error, Result};
pub use descriptor::{OsFamily, PlatformDescriptor, ensure_supported};

pub mod arch;
mod descriptor;
pub mod dir;
mod error;
