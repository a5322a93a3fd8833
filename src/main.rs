mod cli;
mod config;
mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;

fn main() -> ExitCode {
    let Cli {
        config: config_path,
        log_filter,
        command,
    } = Cli::parse();

    let config = match Config::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(config::DEFAULT_LOG_FILTER);
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_filter(log_filter.as_deref()));

    match cli::run(command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the fmt subscriber; `log` records of the core crate are forwarded to it.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
