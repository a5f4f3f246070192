use std::fmt;

use crate::arch;
use crate::error::{Error, Result};

/// Operating system family, as far as installer selection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Macos,
    LinuxLike,
}

impl OsFamily {
    /// Family of the compile target.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") { Self::Macos } else { Self::LinuxLike }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::Macos => write!(f, "macos"),
            OsFamily::LinuxLike => write!(f, "linux"),
        }
    }
}

/// The platform an installer is being fetched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDescriptor {
    pub os_family: OsFamily,
    pub is_64bit:  bool,
    pub arch:      String,
}

impl PlatformDescriptor {
    pub fn new(os_family: OsFamily, is_64bit: bool, arch: impl Into<String>) -> Self {
        Self {
            os_family,
            is_64bit,
            arch: arch.into(),
        }
    }

    /// Describe the host this binary runs on.
    pub fn detect() -> Self {
        Self::new(OsFamily::current(), arch::is_64bit(), arch::machine())
    }

    pub fn is_macos(&self) -> bool {
        self.os_family == OsFamily::Macos
    }

    /// File name suffix an installer for this platform must carry.
    pub fn installer_suffix(&self) -> &'static str {
        match (self.os_family, self.is_64bit) {
            (OsFamily::Macos, _) => ".dmg",
            (OsFamily::LinuxLike, true) => "-x86_64.txz",
            (OsFamily::LinuxLike, false) => "-i686.txz",
        }
    }
}

impl fmt::Display for PlatformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = if self.is_64bit { 64 } else { 32 };
        write!(f, "{} {}-bit ({})", self.os_family, bits, self.arch)
    }
}

/// Refuse platforms no installer is published for.
pub fn ensure_supported(platform: &PlatformDescriptor) -> Result<()> {
    if arch::is_arm(&platform.arch) {
        return Err(Error::UnsupportedPlatform {
            machine: platform.arch.clone(),
        });
    }
    Ok(())
}
