//! Platform detection using the runner naming scheme.
//!
//! Release artifacts and tool-cache entries are keyed by the names the
//! runner uses (`linux`, `darwin`, `win32` and `x64`, `arm64`, `ia32`),
//! not by Rust's target constants.

use std::fmt;

/// Operating system name used for Windows hosts.
pub const WINDOWS: &str = "win32";

/// Operating system name used for macOS hosts.
pub const DARWIN: &str = "darwin";

/// A host platform descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    /// Operating system (linux, darwin, win32).
    pub os: String,
    /// Architecture (x64, arm64, ia32).
    pub arch: String,
}

impl Platform {
    /// Create a new platform.
    #[must_use]
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Get the platform of the running host.
    #[must_use]
    pub fn current() -> Self {
        Self::from_rust(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Translate Rust's `std::env::consts` values into runner names.
    ///
    /// Values without a runner equivalent pass through unchanged.
    #[must_use]
    pub fn from_rust(os: &str, arch: &str) -> Self {
        let os = match os {
            "macos" => DARWIN,
            "windows" => WINDOWS,
            other => other,
        };
        let arch = match arch {
            "x86_64" => "x64",
            "aarch64" => "arm64",
            "x86" => "ia32",
            "powerpc64" => "ppc64",
            other => other,
        };
        Self::new(os, arch)
    }

    /// Whether this is a Windows host.
    #[must_use]
    pub fn is_windows(&self) -> bool {
        self.os == WINDOWS
    }

    /// Whether this is a macOS host.
    #[must_use]
    pub fn is_darwin(&self) -> bool {
        self.os == DARWIN
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
