//! Runner directory resolution.
//!
//! The runner exports `RUNNER_TEMP` and `RUNNER_TOOL_CACHE`. When they are
//! missing (local runs, self-hosted runners with an old agent) the
//! directories fall back to `<base>/actions/temp` and `<base>/actions/cache`.

use std::path::PathBuf;

use crate::platform::Platform;

/// Scratch directory exported by the runner.
pub const RUNNER_TEMP: &str = "RUNNER_TEMP";

/// Tool cache root exported by the runner.
pub const RUNNER_TOOL_CACHE: &str = "RUNNER_TOOL_CACHE";

/// Windows user profile directory.
pub const USERPROFILE: &str = "USERPROFILE";

/// Read an environment variable, treating an empty value as unset.
#[must_use]
pub fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Base location that the `actions/...` fallbacks hang off.
///
/// The user profile on Windows (or `C:\` without one), `/Users` on macOS
/// and `/home` everywhere else.
#[must_use]
pub fn default_base_location(platform: &Platform, user_profile: Option<&str>) -> PathBuf {
    if platform.is_windows() {
        PathBuf::from(user_profile.filter(|p| !p.is_empty()).unwrap_or("C:\\"))
    } else if platform.is_darwin() {
        PathBuf::from("/Users")
    } else {
        PathBuf::from("/home")
    }
}

/// `<base>/actions/<leaf>` for the given platform.
#[must_use]
pub fn default_actions_dir(platform: &Platform, user_profile: Option<&str>, leaf: &str) -> PathBuf {
    default_base_location(platform, user_profile)
        .join("actions")
        .join(leaf)
}

/// Directories the toolkit writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerPaths {
    /// Scratch space for downloads and extractions.
    pub temp: PathBuf,
    /// Root of the tool cache.
    pub tool_cache: PathBuf,
}

impl RunnerPaths {
    /// Create paths from explicit directories.
    #[must_use]
    pub fn new(temp: impl Into<PathBuf>, tool_cache: impl Into<PathBuf>) -> Self {
        Self {
            temp: temp.into(),
            tool_cache: tool_cache.into(),
        }
    }

    /// Resolve paths from optional overrides, falling back to the platform defaults.
    #[must_use]
    pub fn resolve(
        platform: &Platform,
        temp: Option<&str>,
        tool_cache: Option<&str>,
        user_profile: Option<&str>,
    ) -> Self {
        let temp = temp
            .filter(|t| !t.is_empty())
            .map_or_else(|| default_actions_dir(platform, user_profile, "temp"), PathBuf::from);
        let tool_cache = tool_cache
            .filter(|t| !t.is_empty())
            .map_or_else(|| default_actions_dir(platform, user_profile, "cache"), PathBuf::from);
        Self { temp, tool_cache }
    }

    /// Resolve paths from `RUNNER_TEMP`, `RUNNER_TOOL_CACHE` and `USERPROFILE`.
    #[must_use]
    pub fn from_env(platform: &Platform) -> Self {
        Self::resolve(
            platform,
            env_non_empty(RUNNER_TEMP).as_deref(),
            env_non_empty(RUNNER_TOOL_CACHE).as_deref(),
            env_non_empty(USERPROFILE).as_deref(),
        )
    }
}
