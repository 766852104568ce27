//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed subcommands to their handlers.
//! - Turn flag values into lifecycle options.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use sumo_config::Config;

use crate::args::{self, Commands};
use crate::commands;

/// Run one subcommand against the loaded configuration.
pub(crate) async fn run_command(command: Commands, config: Config, quiet: bool) -> Result<()> {
    match command {
        Commands::JobCreate { job } => commands::job_create::run(config, job.into(), quiet).await,
        Commands::JobStatus {
            job_id,
            poll,
            sleep,
        } => {
            let opts = args::poll_options(poll, sleep);
            commands::job_status::run(config, &job_id, opts, quiet).await
        }
        Commands::JobResults {
            job_id,
            records,
            messages,
            all,
            limit,
            offset,
            sleep,
        } => {
            let opts = args::page_options(records, messages, all, limit, offset, sleep);
            commands::job_results::run(config, &job_id, opts, quiet).await
        }
        Commands::JobDelete { job_id } => commands::job_delete::run(config, &job_id, quiet).await,
        Commands::JobKeepAlive {
            job_id,
            interval,
            duration,
            count,
            forever,
        } => {
            let opts = args::keep_alive_options(interval, duration, count, forever);
            commands::job_keep_alive::run(config, &job_id, opts, quiet).await
        }
        Commands::JobProcessFull {
            job,
            records,
            messages,
            all,
            limit,
            offset,
            no_poll,
            sleep,
            page_sleep,
        } => {
            let opts = args::run_options(
                records, messages, all, limit, offset, no_poll, sleep, page_sleep,
            );
            commands::job_process_full::run(config, job.into(), opts, quiet).await
        }
    }
}
