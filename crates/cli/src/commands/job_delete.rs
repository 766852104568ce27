//! `job-delete`: delete a search job.

use anyhow::Result;
use sumo_config::Config;

use crate::progress::ProgressReporter;

pub async fn run(config: Config, job_id: &str, quiet: bool) -> Result<()> {
    let client = super::build_client(&config)?;
    let mut progress = ProgressReporter::stderr(quiet);
    sumo_lifecycle::delete_job(&client, job_id, &mut progress).await?;
    Ok(())
}
