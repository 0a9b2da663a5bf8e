//! Runner tool cache.
//!
//! Layout shared with the other setup actions on the same runner:
//!
//! ```text
//! $RUNNER_TOOL_CACHE/
//! └── perl/
//!     └── 5.32.0/
//!         ├── x64/            # Installed tree
//!         └── x64.complete    # Written last; marks the entry usable
//! ```

use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};
use walkdir::WalkDir;

use crate::{Error, Result};

/// A tool cache rooted at a directory, for one architecture.
#[derive(Debug, Clone)]
pub struct ToolCache {
    root: PathBuf,
    arch: String,
}

impl ToolCache {
    /// Create a cache at the specified root directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, arch: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            arch: arch.into(),
        }
    }

    /// Get the cache root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the directory for a cached tool.
    #[must_use]
    pub fn tool_dir(&self, tool: &str, version: &str) -> PathBuf {
        self.root.join(tool).join(version).join(&self.arch)
    }

    fn marker_path(&self, tool: &str, version: &str) -> PathBuf {
        self.root
            .join(tool)
            .join(version)
            .join(format!("{}.complete", self.arch))
    }

    /// Copy `source` into the cache as `(tool, version)`.
    ///
    /// Any existing entry is replaced. The completion marker is written only
    /// after the copy finished.
    pub fn cache_dir(&self, source: &Path, tool: &str, version: &str) -> Result<PathBuf> {
        if !source.is_dir() {
            return Err(Error::NotADirectory(source.to_path_buf()));
        }

        let dest = self.tool_dir(tool, version);
        let marker = self.marker_path(tool, version);
        debug!(?source, ?dest, "Caching tool directory");

        if marker.exists() {
            std::fs::remove_file(&marker)?;
        }
        if dest.exists() {
            std::fs::remove_dir_all(&dest)?;
        }
        std::fs::create_dir_all(&dest)?;

        copy_tree(source, &dest)?;
        std::fs::write(&marker, b"")?;

        info!(tool, version, ?dest, "Cached tool");
        Ok(dest)
    }

    /// Look up a completed cache entry.
    #[must_use]
    pub fn find(&self, tool: &str, version: &str) -> Option<PathBuf> {
        if tool.is_empty() || version.is_empty() {
            return None;
        }

        let path = self.tool_dir(tool, version);
        if path.is_dir() && self.marker_path(tool, version).is_file() {
            trace!(tool, version, ?path, "Cache hit for tool");
            Some(path)
        } else {
            trace!(tool, version, "Cache miss for tool");
            None
        }
    }
}

/// Recursively copy the contents of `source` into `dest`.
fn copy_tree(source: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(std::io::Error::other)?;
        let target = dest.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            std::fs::create_dir_all(&target)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> Result<()> {
    let points_to = std::fs::read_link(link)?;
    std::os::unix::fs::symlink(points_to, target)?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, target: &Path) -> Result<()> {
    std::fs::copy(link, target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn populate_source(dir: &Path) -> PathBuf {
        let source = dir.join("extracted").join("perl");
        std::fs::create_dir_all(source.join("bin")).unwrap();
        std::fs::create_dir_all(source.join("lib").join("File")).unwrap();
        std::fs::write(source.join("bin").join("perl"), b"#!perl").unwrap();
        std::fs::write(source.join("lib").join("File").join("Spec.pm"), b"1;").unwrap();
        source
    }

    #[test]
    fn test_tool_dir_layout() {
        let cache = ToolCache::new("/opt/hostedtoolcache", "x64");
        assert_eq!(
            cache.tool_dir("perl", "5.32.0"),
            PathBuf::from("/opt/hostedtoolcache/perl/5.32.0/x64")
        );
        assert_eq!(
            cache.marker_path("perl", "5.32.0"),
            PathBuf::from("/opt/hostedtoolcache/perl/5.32.0/x64.complete")
        );
    }

    #[test]
    fn test_cache_dir_copies_tree() -> Result<()> {
        let temp = TempDir::new()?;
        let source = populate_source(temp.path());
        let cache = ToolCache::new(temp.path().join("cache"), "x64");

        let cached = cache.cache_dir(&source, "perl", "5.32.0")?;

        assert_eq!(cached, temp.path().join("cache/perl/5.32.0/x64"));
        assert_eq!(std::fs::read(cached.join("bin/perl"))?, b"#!perl");
        assert_eq!(std::fs::read(cached.join("lib/File/Spec.pm"))?, b"1;");
        assert!(temp.path().join("cache/perl/5.32.0/x64.complete").is_file());
        // The source is copied, not moved
        assert!(source.join("bin/perl").exists());
        Ok(())
    }

    #[test]
    fn test_cache_dir_replaces_existing_entry() -> Result<()> {
        let temp = TempDir::new()?;
        let source = populate_source(temp.path());
        let cache = ToolCache::new(temp.path().join("cache"), "x64");

        let stale = cache.tool_dir("perl", "5.32.0");
        std::fs::create_dir_all(&stale)?;
        std::fs::write(stale.join("stale.txt"), b"old")?;

        let cached = cache.cache_dir(&source, "perl", "5.32.0")?;

        assert!(!cached.join("stale.txt").exists());
        assert!(cached.join("bin/perl").exists());
        Ok(())
    }

    #[test]
    fn test_cache_dir_rejects_missing_source() {
        let temp = TempDir::new().unwrap();
        let cache = ToolCache::new(temp.path().join("cache"), "x64");

        let result = cache.cache_dir(&temp.path().join("nope"), "perl", "5.32.0");

        assert!(matches!(result, Err(Error::NotADirectory(_))));
        assert!(!cache.tool_dir("perl", "5.32.0").exists());
    }

    #[test]
    fn test_cache_dir_rejects_file_source() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("perl");
        std::fs::write(&file, b"not a dir").unwrap();
        let cache = ToolCache::new(temp.path().join("cache"), "x64");

        assert!(matches!(
            cache.cache_dir(&file, "perl", "5.32.0"),
            Err(Error::NotADirectory(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_cache_dir_preserves_symlinks() -> Result<()> {
        let temp = TempDir::new()?;
        let source = populate_source(temp.path());
        std::os::unix::fs::symlink("perl", source.join("bin").join("perl5.32.0"))?;
        let cache = ToolCache::new(temp.path().join("cache"), "x64");

        let cached = cache.cache_dir(&source, "perl", "5.32.0")?;

        let link = cached.join("bin").join("perl5.32.0");
        assert_eq!(std::fs::read_link(&link)?, PathBuf::from("perl"));
        assert_eq!(std::fs::read(&link)?, b"#!perl");
        Ok(())
    }

    #[test]
    fn test_find_after_cache() -> Result<()> {
        let temp = TempDir::new()?;
        let source = populate_source(temp.path());
        let cache = ToolCache::new(temp.path().join("cache"), "arm64");

        assert!(cache.find("perl", "5.32.0").is_none());
        let cached = cache.cache_dir(&source, "perl", "5.32.0")?;
        assert_eq!(cache.find("perl", "5.32.0"), Some(cached));
        Ok(())
    }

    #[test]
    fn test_find_ignores_incomplete_entry() {
        let temp = TempDir::new().unwrap();
        let cache = ToolCache::new(temp.path(), "x64");
        std::fs::create_dir_all(cache.tool_dir("perl", "5.30.0")).unwrap();

        assert!(cache.find("perl", "5.30.0").is_none());
    }

    #[test]
    fn test_find_other_arch_misses() -> Result<()> {
        let temp = TempDir::new()?;
        let source = populate_source(temp.path());
        let x64 = ToolCache::new(temp.path().join("cache"), "x64");
        let arm64 = ToolCache::new(temp.path().join("cache"), "arm64");

        x64.cache_dir(&source, "perl", "5.32.0")?;

        assert!(arm64.find("perl", "5.32.0").is_none());
        Ok(())
    }

    #[test]
    fn test_find_empty_arguments() {
        let cache = ToolCache::new("/opt/hostedtoolcache", "x64");
        assert!(cache.find("", "5.32.0").is_none());
        assert!(cache.find("perl", "").is_none());
    }

    #[test]
    fn test_cache_root() {
        let cache = ToolCache::new("/custom/cache", "x64");
        assert_eq!(cache.root(), Path::new("/custom/cache"));
    }
}
