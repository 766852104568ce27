//! sumo-search-job-cli - drive Sumo Logic search jobs from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Validate job inputs, then build the configuration (file < env < CLI flags).
//! - Run the selected job command and map failures to exit codes.
//!
//! Does NOT handle:
//! - REST API details (see `crates/client`).
//! - Job validation, polling or pagination (see `crates/lifecycle`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs and progress go to stderr; stdout carries only command results.

mod args;
mod commands;
mod dispatch;
mod error;
mod progress;

use std::time::Duration;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use sumo_config::{Config, ConfigError, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const VERBOSE_FILTER: &str =
    "warn,sumo_search_job_cli=debug,sumo_client=debug,sumo_lifecycle=debug,sumo_config=debug";

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Job inputs are checked before configuration so option mistakes are
    // reported as such even without credentials.
    if let Some(inputs) = cli.command.job_inputs()
        && let Err(e) = sumo_lifecycle::prepare_job(&inputs, commands::now_utc())
    {
        eprintln!("{}", e);
        let err = anyhow::Error::from(e);
        std::process::exit(err.exit_code().as_i32());
    }

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            let err = anyhow::Error::from(e);
            std::process::exit(err.exit_code().as_i32());
        }
    };

    let exit_code = match run_command(cli.command, config, cli.quiet).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// `RUST_LOG` wins; otherwise `warn`, or debug for our crates with `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { "warn" })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored to allow fallback to the default path
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    // Env first, then CLI flags on top; the file only fills what is still unset.
    loader = loader.from_env()?;

    if let Some(ref region) = cli.region {
        loader = loader.with_deployment(region.clone());
    }
    if let Some(ref access_id) = cli.access_id {
        loader = loader.with_access_id(access_id.clone());
    }
    if let Some(ref access_key) = cli.access_key {
        loader = loader.with_access_key(access_key.clone());
    }
    if let Some(ref host) = cli.host {
        loader = loader.with_host(host.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }

    loader.from_file()?.build()
}
