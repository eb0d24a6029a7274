// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cli;
pub mod debounce;
pub mod dictionary;
pub mod equality;
pub mod logging;
pub mod outcome;
pub mod sequence;
pub mod settings;
pub mod text;
mod util;

use clap::Parser;
use std::process::ExitCode;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

/// Command-line entry point: parse arguments, load settings, set up logging
/// and run the requested command.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn run() -> ExitCode {
    let cli = cli::Cli::parse();

    let loaded = settings::Settings::load(cli.config.as_deref());
    let configured_level = loaded
        .as_ref()
        .ok()
        .and_then(settings::Settings::log_level_filter);
    logging::init(logging::resolve_level(configured_level, cli.verbose));

    let result = loaded
        .map_err(cli::CliError::from)
        .and_then(|settings| cli.execute(&settings, &mut std::io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Command failed: {:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
