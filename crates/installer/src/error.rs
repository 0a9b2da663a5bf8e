//! Error types for Perl installation.

use thiserror::Error;

/// Result type for installer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort an installation.
#[derive(Error, Debug)]
pub enum Error {
    /// The release archive could not be downloaded.
    #[error("Failed to download version {version}: {cause}")]
    DownloadFailed {
        /// The requested Perl version.
        version: String,
        /// Underlying toolkit error.
        #[source]
        cause: setup_perl_toolkit::Error,
    },

    /// No temporary directory is configured.
    #[error("Temp directory not set")]
    ConfigMissing,

    /// The downloaded archive could not be extracted.
    #[error("Failed to extract archive: {cause}")]
    ExtractFailed {
        /// Underlying toolkit error.
        #[source]
        cause: setup_perl_toolkit::Error,
    },

    /// The extracted tree could not be registered in the tool cache.
    #[error("Failed to cache installation: {cause}")]
    CacheFailed {
        /// Underlying toolkit error.
        #[source]
        cause: setup_perl_toolkit::Error,
    },
}

impl Error {
    /// Create a download failed error.
    #[must_use]
    pub fn download_failed(version: impl Into<String>, cause: setup_perl_toolkit::Error) -> Self {
        Self::DownloadFailed {
            version: version.into(),
            cause,
        }
    }

    /// Create an extract failed error.
    #[must_use]
    pub fn extract_failed(cause: setup_perl_toolkit::Error) -> Self {
        Self::ExtractFailed { cause }
    }

    /// Create a cache failed error.
    #[must_use]
    pub fn cache_failed(cause: setup_perl_toolkit::Error) -> Self {
        Self::CacheFailed { cause }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::path::PathBuf;

    #[test]
    fn test_download_failed_message() {
        let cause = setup_perl_toolkit::Error::http_status("https://example.com/x", 404);
        let err = Error::download_failed("5.32.0", cause);
        assert_eq!(
            err.to_string(),
            "Failed to download version 5.32.0: Unexpected HTTP 404 from https://example.com/x"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_missing_message() {
        assert_eq!(Error::ConfigMissing.to_string(), "Temp directory not set");
    }

    #[test]
    fn test_cache_failed_keeps_source() {
        let cause = setup_perl_toolkit::Error::NotADirectory(PathBuf::from("/tmp/x/perl"));
        let err = Error::cache_failed(cause);
        assert!(err.to_string().contains("/tmp/x/perl"));
        assert!(matches!(
            err.source()
                .and_then(|s| s.downcast_ref::<setup_perl_toolkit::Error>()),
            Some(setup_perl_toolkit::Error::NotADirectory(_))
        ));
    }
}
