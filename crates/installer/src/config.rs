//! Installer configuration, resolved once at startup.

use setup_perl_toolkit::Platform;
use setup_perl_toolkit::paths::{USERPROFILE, default_actions_dir, env_non_empty};
use std::path::{Path, PathBuf};

/// Override for the installer's temporary directory.
pub const RUNNER_TEMPDIRECTORY: &str = "RUNNER_TEMPDIRECTORY";

/// Configuration passed into [`crate::Installer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    temp_directory: PathBuf,
}

impl InstallerConfig {
    /// Create a configuration with an explicit temporary directory.
    #[must_use]
    pub fn new(temp_directory: impl Into<PathBuf>) -> Self {
        Self {
            temp_directory: temp_directory.into(),
        }
    }

    /// Resolve the temporary directory.
    ///
    /// A non-empty `override_dir` is used verbatim. Otherwise it is
    /// `<base>/actions/temp`, where base is the user profile (or `C:\`) on
    /// Windows, `/Users` on macOS and `/home` elsewhere.
    #[must_use]
    pub fn resolve(
        platform: &Platform,
        override_dir: Option<&str>,
        user_profile: Option<&str>,
    ) -> Self {
        let temp_directory = match override_dir.filter(|dir| !dir.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_actions_dir(platform, user_profile, "temp"),
        };
        Self { temp_directory }
    }

    /// Resolve from `RUNNER_TEMPDIRECTORY` and `USERPROFILE`.
    #[must_use]
    pub fn from_env(platform: &Platform) -> Self {
        Self::resolve(
            platform,
            env_non_empty(RUNNER_TEMPDIRECTORY).as_deref(),
            env_non_empty(USERPROFILE).as_deref(),
        )
    }

    /// The resolved temporary directory.
    #[must_use]
    pub fn temp_directory(&self) -> &Path {
        &self.temp_directory
    }
}
