//! Error types for toolkit operations.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while downloading, extracting or caching a tool.
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the body could not be read.
    #[error("Request to {url} failed: {source}")]
    Request {
        /// The requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Unexpected HTTP {status} from {url}")]
    HttpStatus {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The archive is corrupt or could not be unpacked.
    #[error("Failed to extract {}: {message}", .archive.display())]
    Extraction {
        /// The archive being extracted.
        archive: PathBuf,
        /// Error message.
        message: String,
    },

    /// The directory handed to the tool cache does not exist or is a file.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A blocking task was cancelled or panicked.
    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Walking a directory tree failed.
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a request error.
    #[must_use]
    pub fn request(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Request {
            url: url.into(),
            source,
        }
    }

    /// Create an HTTP status error.
    #[must_use]
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create an extraction error.
    #[must_use]
    pub fn extraction(archive: &Path, message: impl Into<String>) -> Self {
        Self::Extraction {
            archive: archive.to_path_buf(),
            message: message.into(),
        }
    }
}
