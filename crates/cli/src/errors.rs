//! CLI error types with miette diagnostics.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that fail the action step.
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(code(setup_perl::install_failed))]
    Install(#[from] setup_perl_installer::Error),

    #[error("Failed to prepare toolkit: {0}")]
    #[diagnostic(code(setup_perl::toolkit))]
    Toolkit(#[from] setup_perl_toolkit::Error),

    #[error("Failed to write workflow file command {}: {source}", .path.display())]
    #[diagnostic(
        code(setup_perl::file_command),
        help("Check that GITHUB_PATH and GITHUB_OUTPUT point to writable files")
    )]
    FileCommand {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn file_command(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileCommand {
            path: path.into(),
            source,
        }
    }
}
