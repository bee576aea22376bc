//! Scroller CLI entrypoint for the terminal carousel.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use scroller::{ScrollerConfig, ScrollerError};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ScrollerError> {
    let config = load_config()?;
    config.validate()?;
    cli::carousel::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ScrollerError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ScrollerConfig, ScrollerError> {
    ScrollerConfig::load().map_err(|error| ScrollerError::Configuration {
        message: error.to_string(),
    })
}
