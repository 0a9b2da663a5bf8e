//! Release artifact naming.
//!
//! Prebuilt archives are published as assets of this action's own GitHub
//! release. The asset name always ends in `.tar.gz`, including the Windows
//! build whose bytes are a zip file.

use setup_perl_toolkit::Platform;

/// Name of the tool, used for asset names and tool cache entries.
pub const TOOL_NAME: &str = "perl";

/// Release tag of this action that hosts the prebuilt archives.
pub const ACTION_VERSION: &str = "v0.0.1-alpha";

/// Release download base for this action's repository.
pub const RELEASE_BASE_URL: &str = "https://github.com/shogo82148/actions-setup-perl/releases/download";

/// Where release archives are downloaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSource {
    base_url: String,
    tag: String,
}

impl Default for ReleaseSource {
    fn default() -> Self {
        Self::new(RELEASE_BASE_URL, ACTION_VERSION)
    }
}

impl ReleaseSource {
    /// Create a source from a download base URL and release tag.
    #[must_use]
    pub fn new(base_url: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tag: tag.into(),
        }
    }

    /// The release tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// `<base>/<tag>/<file_name>`.
    #[must_use]
    pub fn download_url(&self, file_name: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.tag, file_name)
    }
}

/// `perl-<version>-<os>-<arch>.tar.gz`.
#[must_use]
pub fn file_name(version: &str, platform: &Platform) -> String {
    format!(
        "{}-{}-{}-{}.tar.gz",
        TOOL_NAME, version, platform.os, platform.arch
    )
}
