//! Tool acquisition primitives for CI runners.
//!
//! This crate provides the building blocks a setup action delegates to:
//! - Download a release artifact into the runner's scratch space
//! - Extract zip and gzip-compressed tar archives
//! - Register a directory in the runner tool cache, keyed by tool, version
//!   and architecture, and look it up again
//!
//! # Example
//!
//! ```ignore
//! use setup_perl_toolkit::{Platform, RunnerPaths, RunnerToolKit, ToolKit};
//!
//! let platform = Platform::current();
//! let toolkit = RunnerToolKit::new(RunnerPaths::from_env(&platform), &platform)?;
//!
//! let archive = toolkit.download_tool("https://example.com/tool.tar.gz").await?;
//! let extracted = toolkit.extract_tar(&archive).await?;
//! let cached = toolkit.cache_dir(&extracted, "tool", "1.0.0").await?;
//! ```

#![warn(missing_docs)]

mod cache;
pub mod download;
mod error;
pub mod extract;
pub mod paths;
mod platform;
mod runner;

use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub use cache::ToolCache;
pub use error::{Error, Result};
pub use paths::RunnerPaths;
pub use platform::{DARWIN, Platform, WINDOWS};
pub use runner::RunnerToolKit;

/// The download, extraction and caching operations an installer needs.
///
/// Implementations choose their own output locations; callers only see the
/// returned paths.
#[async_trait]
pub trait ToolKit: Send + Sync {
    /// Download `url` and return the local file path.
    async fn download_tool(&self, url: &str) -> Result<PathBuf>;

    /// Extract a zip archive and return the output directory.
    async fn extract_zip(&self, archive: &Path) -> Result<PathBuf>;

    /// Extract a gzip-compressed tar archive and return the output directory.
    async fn extract_tar(&self, archive: &Path) -> Result<PathBuf>;

    /// Register `source` in the tool cache as `(tool, version)` and return
    /// the cached directory.
    async fn cache_dir(&self, source: &Path, tool: &str, version: &str) -> Result<PathBuf>;

    /// Look up a completed tool cache entry.
    fn find(&self, tool: &str, version: &str) -> Option<PathBuf>;
}
