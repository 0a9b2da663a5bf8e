//! Command-line and environment configuration.
//!
//! Every setting can come from a flag or from the variables the runner
//! exports, so the binary works both as an action step and by hand.

use clap::Parser;
use std::path::PathBuf;

use crate::tracing::{LogLevel, TracingConfig, TracingFormat};

/// Install a prebuilt Perl into the runner tool cache.
#[derive(Debug, Parser)]
#[command(name = "setup-perl", version, about)]
pub struct Cli {
    /// Perl version to install (the action's `perl-version` input)
    #[arg(long, env = "INPUT_PERL-VERSION")]
    pub perl_version: Option<String>,

    /// Temporary directory override
    #[arg(long, env = "RUNNER_TEMPDIRECTORY")]
    pub temp_directory: Option<String>,

    /// Scratch directory for downloads and extraction
    #[arg(long, env = "RUNNER_TEMP")]
    pub runner_temp: Option<String>,

    /// Root of the tool cache
    #[arg(long, env = "RUNNER_TOOL_CACHE")]
    pub tool_cache: Option<String>,

    /// Download base for release archives
    #[arg(long, env = "SETUP_PERL_RELEASE_URL", hide = true)]
    pub release_url: Option<String>,

    /// File the runner reads PATH additions from
    #[arg(long, env = "GITHUB_PATH", hide = true)]
    pub github_path: Option<PathBuf>,

    /// File the runner reads step outputs from
    #[arg(long, env = "GITHUB_OUTPUT", hide = true)]
    pub github_output: Option<PathBuf>,

    /// Log level, ignored when RUST_LOG is set
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: TracingFormat,
}

impl Cli {
    /// The requested version, if a non-blank one was supplied.
    pub fn version(&self) -> Option<&str> {
        self.perl_version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    pub fn tracing_config(&self) -> TracingConfig {
        TracingConfig {
            format: self.log_format,
            level: self.log_level.into(),
            filter: None,
        }
    }
}
