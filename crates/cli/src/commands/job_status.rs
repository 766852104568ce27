//! `job-status`: show (or poll) a job's status.

use anyhow::{Context, Result};
use sumo_config::Config;
use sumo_lifecycle::PollOptions;

use crate::progress::ProgressReporter;

pub async fn run(config: Config, job_id: &str, opts: PollOptions, quiet: bool) -> Result<()> {
    let client = super::build_client(&config)?;
    let mut progress = ProgressReporter::stderr(quiet);
    let snapshot = sumo_lifecycle::poll_status(&client, job_id, &opts, &mut progress)
        .await
        .with_context(|| format!("Failed to fetch status of job {job_id}"))?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
