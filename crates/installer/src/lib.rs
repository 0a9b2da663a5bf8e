//! Perl installer for the setup-perl action.
//!
//! Given a version string, downloads the prebuilt Perl archive for the
//! current platform from this action's release assets, extracts it and
//! registers the `perl` directory inside it in the runner tool cache.
//!
//! # Example
//!
//! ```ignore
//! use setup_perl_installer::{Installer, InstallerConfig};
//! use setup_perl_toolkit::{Platform, RunnerPaths, RunnerToolKit};
//! use std::sync::Arc;
//!
//! let platform = Platform::current();
//! let toolkit = RunnerToolKit::new(RunnerPaths::from_env(&platform), &platform)?;
//! let installer = Installer::new(Arc::new(toolkit), platform.clone(), InstallerConfig::from_env(&platform));
//!
//! let perl_dir = installer.acquire_perl("5.32.0").await?;
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod installer;
pub mod release;

pub use config::{InstallerConfig, RUNNER_TEMPDIRECTORY};
pub use error::{Error, Result};
pub use installer::Installer;
pub use release::{ACTION_VERSION, ReleaseSource, TOOL_NAME};
