//! Workflow commands understood by the GitHub Actions runner.
//!
//! Two channels exist: `::command::` lines on stdout, and environment files
//! (`GITHUB_PATH`, `GITHUB_OUTPUT`) the runner reads after the step ends.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::CliError;

/// Escape a workflow command message.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// `::error::<message>`
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Report a failure to the runner.
pub fn report_error(message: &str) {
    println!("{}", error_command(message));
}

/// Format a `GITHUB_OUTPUT` entry, using a heredoc delimiter for multi-line values.
fn output_entry(name: &str, value: &str) -> String {
    if value.contains('\n') || value.contains('\r') {
        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        format!("{name}<<{delimiter}\n{value}\n{delimiter}")
    } else {
        format!("{name}={value}")
    }
}

fn append_line(path: &Path, line: &str) -> Result<(), CliError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::file_command(path, e))?;
    writeln!(file, "{line}").map_err(|e| CliError::file_command(path, e))
}

/// Environment files for the current step.
#[derive(Debug, Clone, Default)]
pub struct FileCommands {
    path_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl FileCommands {
    pub fn new(path_file: Option<PathBuf>, output_file: Option<PathBuf>) -> Self {
        let non_empty = |p: PathBuf| (!p.as_os_str().is_empty()).then_some(p);
        Self {
            path_file: path_file.and_then(non_empty),
            output_file: output_file.and_then(non_empty),
        }
    }

    /// Prepend `dir` to `PATH` for the following steps.
    ///
    /// Returns `false` when `GITHUB_PATH` is not available.
    pub fn add_path(&self, dir: &Path) -> Result<bool, CliError> {
        let Some(file) = &self.path_file else {
            warn!(?dir, "GITHUB_PATH is not set; PATH is left unchanged");
            return Ok(false);
        };
        append_line(file, &dir.to_string_lossy())?;
        debug!(?dir, "Added to PATH");
        Ok(true)
    }

    /// Set a step output.
    ///
    /// Returns `false` when `GITHUB_OUTPUT` is not available.
    pub fn set_output(&self, name: &str, value: &str) -> Result<bool, CliError> {
        let Some(file) = &self.output_file else {
            warn!(name, "GITHUB_OUTPUT is not set; output is dropped");
            return Ok(false);
        };
        append_line(file, &output_entry(name, value))?;
        debug!(name, value, "Set step output");
        Ok(true)
    }
}
