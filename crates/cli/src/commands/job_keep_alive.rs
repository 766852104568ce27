//! `job-keep-alive`: periodic status requests so a job does not expire.

use anyhow::{Context, Result};
use sumo_config::Config;
use sumo_lifecycle::KeepAliveOptions;
use tracing::info;

use crate::progress::ProgressReporter;

pub async fn run(config: Config, job_id: &str, opts: KeepAliveOptions, quiet: bool) -> Result<()> {
    let client = super::build_client(&config)?;
    let mut progress = ProgressReporter::stderr(quiet);
    let summary = sumo_lifecycle::keep_alive(&client, job_id, &opts, &mut progress)
        .await
        .with_context(|| format!("Keep-alive for job {job_id} failed"))?;
    info!(job_id, requests = summary.requests, "Keep-alive finished");
    Ok(())
}
