//! setup-perl action entry point.
//!
//! Reads the requested version from the action input, installs that Perl
//! into the runner tool cache and adds its `bin` directory to `PATH` for
//! the following steps.

// Workflow commands and last-resort diagnostics are written directly
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod action;
mod cli;
mod errors;
mod install;
mod tracing;

use clap::Parser;

use crate::cli::Cli;

const EXIT_OK: i32 = 0;
const EXIT_FAILURE: i32 = 1;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = crate::tracing::init_tracing(cli.tracing_config()) {
        // Tracing is not available, fall back to stderr
        eprintln!("{e:?}");
        action::report_error(&e.to_string());
        std::process::exit(EXIT_FAILURE);
    }

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            action::report_error(&format!("Failed to create tokio runtime: {e}"));
            std::process::exit(EXIT_FAILURE);
        }
    };

    let exit_code = rt.block_on(run(cli));
    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> i32 {
    match install::execute_install(&cli).await {
        Ok(_) => EXIT_OK,
        Err(e) => {
            let message = e.to_string();
            ::tracing::error!("{:?}", miette::Report::new(e));
            action::report_error(&message);
            EXIT_FAILURE
        }
    }
}
