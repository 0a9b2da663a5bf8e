//! [`ToolKit`] implementation backed by the runner's directories.

use async_trait::async_trait;
use reqwest::Client;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::cache::ToolCache;
use crate::paths::RunnerPaths;
use crate::platform::Platform;
use crate::{Result, ToolKit, download, extract};

/// Downloads over HTTP, extracts into `RUNNER_TEMP` and caches into
/// `RUNNER_TOOL_CACHE`.
#[derive(Debug, Clone)]
pub struct RunnerToolKit {
    client: Client,
    paths: RunnerPaths,
    cache: ToolCache,
}

impl RunnerToolKit {
    /// Create a toolkit for the given directories and host platform.
    ///
    /// Cache entries are keyed by the platform's architecture.
    pub fn new(paths: RunnerPaths, platform: &Platform) -> Result<Self> {
        let cache = ToolCache::new(paths.tool_cache.clone(), platform.arch.clone());
        Ok(Self {
            client: download::build_client()?,
            paths,
            cache,
        })
    }

    /// Directories this toolkit writes to.
    #[must_use]
    pub fn paths(&self) -> &RunnerPaths {
        &self.paths
    }

    fn scratch_dir(&self) -> PathBuf {
        self.paths.temp.join(Uuid::new_v4().to_string())
    }
}

#[async_trait]
impl ToolKit for RunnerToolKit {
    async fn download_tool(&self, url: &str) -> Result<PathBuf> {
        download::download_tool(&self.client, url, &self.paths.temp).await
    }

    async fn extract_zip(&self, archive: &Path) -> Result<PathBuf> {
        let archive = archive.to_path_buf();
        let dest = self.scratch_dir();
        tokio::task::spawn_blocking(move || -> Result<PathBuf> {
            extract::extract_zip(&archive, &dest)?;
            Ok(dest)
        })
        .await?
    }

    async fn extract_tar(&self, archive: &Path) -> Result<PathBuf> {
        let archive = archive.to_path_buf();
        let dest = self.scratch_dir();
        tokio::task::spawn_blocking(move || -> Result<PathBuf> {
            extract::extract_tar(&archive, &dest)?;
            Ok(dest)
        })
        .await?
    }

    async fn cache_dir(&self, source: &Path, tool: &str, version: &str) -> Result<PathBuf> {
        let cache = self.cache.clone();
        let source = source.to_path_buf();
        let tool = tool.to_string();
        let version = version.to_string();
        tokio::task::spawn_blocking(move || cache.cache_dir(&source, &tool, &version)).await?
    }

    fn find(&self, tool: &str, version: &str) -> Option<PathBuf> {
        self.cache.find(tool, version)
    }
}
