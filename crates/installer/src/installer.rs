//! Perl installation into the tool cache.

use setup_perl_toolkit::{Platform, ToolKit};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::InstallerConfig;
use crate::release::{self, ReleaseSource, TOOL_NAME};
use crate::{Error, Result};

/// Downloads, extracts and caches prebuilt Perl releases.
///
/// The actual transfer, extraction and cache bookkeeping are delegated to
/// the [`ToolKit`]; the installer only decides what to fetch and which
/// archive format to expect.
pub struct Installer {
    toolkit: Arc<dyn ToolKit>,
    platform: Platform,
    config: InstallerConfig,
    release: ReleaseSource,
}

impl Installer {
    /// Create an installer for `platform` using the default release source.
    #[must_use]
    pub fn new(toolkit: Arc<dyn ToolKit>, platform: Platform, config: InstallerConfig) -> Self {
        Self {
            toolkit,
            platform,
            config,
            release: ReleaseSource::default(),
        }
    }

    /// Download archives from `release` instead of the default source.
    #[must_use]
    pub fn with_release_source(mut self, release: ReleaseSource) -> Self {
        self.release = release;
        self
    }

    /// The platform archives are selected for.
    #[must_use]
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Install `version`.
    pub async fn get_perl(&self, version: &str) -> Result<()> {
        self.acquire_perl(version).await?;
        Ok(())
    }

    /// Look up an already cached installation of `version`.
    #[must_use]
    pub fn find_perl(&self, version: &str) -> Option<PathBuf> {
        self.toolkit.find(TOOL_NAME, version)
    }

    /// Install `version` and return the cached installation directory.
    pub async fn acquire_perl(&self, version: &str) -> Result<PathBuf> {
        let file_name = release::file_name(version, &self.platform);
        let download_url = self.release.download_url(&file_name);
        info!(%version, platform = %self.platform, %download_url, "Downloading Perl");

        let download_path = match self.toolkit.download_tool(&download_url).await {
            Ok(path) => path,
            Err(e) => {
                debug!(%version, error = ?e, "Perl download failed");
                return Err(Error::download_failed(version, e));
            }
        };

        if self.config.temp_directory().as_os_str().is_empty() {
            return Err(Error::ConfigMissing);
        }

        let extracted = if self.platform.is_windows() {
            self.toolkit.extract_zip(&download_path).await
        } else {
            self.toolkit.extract_tar(&download_path).await
        }
        .map_err(Error::extract_failed)?;
        debug!(?extracted, "Extracted Perl archive");

        let tool_root = extracted.join(TOOL_NAME);
        self.toolkit
            .cache_dir(&tool_root, TOOL_NAME, version)
            .await
            .map_err(Error::cache_failed)
    }
}
