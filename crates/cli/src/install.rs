//! The action step: install the requested Perl and expose it to later steps.

use setup_perl_installer::{ACTION_VERSION, Installer, InstallerConfig, ReleaseSource};
use setup_perl_toolkit::paths::{USERPROFILE, env_non_empty};
use setup_perl_toolkit::{Platform, RunnerPaths, RunnerToolKit};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::action::FileCommands;
use crate::cli::Cli;
use crate::errors::CliError;

/// Run the step. Returns the installation directory, or `None` when no
/// version was requested.
pub async fn execute_install(cli: &Cli) -> Result<Option<PathBuf>, CliError> {
    let Some(version) = cli.version() else {
        info!("No perl-version supplied; nothing to install");
        return Ok(None);
    };

    let platform = Platform::current();
    let user_profile = env_non_empty(USERPROFILE);
    let paths = RunnerPaths::resolve(
        &platform,
        cli.runner_temp.as_deref(),
        cli.tool_cache.as_deref(),
        user_profile.as_deref(),
    );
    let config = InstallerConfig::resolve(
        &platform,
        cli.temp_directory.as_deref(),
        user_profile.as_deref(),
    );

    let toolkit = RunnerToolKit::new(paths, &platform)?;
    let mut installer = Installer::new(Arc::new(toolkit), platform, config);
    if let Some(url) = cli.release_url.as_deref().filter(|u| !u.is_empty()) {
        installer = installer.with_release_source(ReleaseSource::new(url, ACTION_VERSION));
    }

    let perl_dir = if let Some(dir) = installer.find_perl(version) {
        info!(%version, ?dir, "Found Perl in tool cache");
        dir
    } else {
        installer.acquire_perl(version).await?
    };

    let commands = FileCommands::new(cli.github_path.clone(), cli.github_output.clone());
    commands.add_path(&perl_dir.join("bin"))?;
    commands.set_output("perl-path", &perl_dir.to_string_lossy())?;

    info!(%version, ?perl_dir, "Perl is ready");
    Ok(Some(perl_dir))
}
