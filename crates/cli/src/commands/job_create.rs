//! `job-create`: validate the job inputs and create a search job.

use anyhow::Result;
use sumo_config::Config;
use sumo_lifecycle::JobInputs;
use tracing::debug;

use crate::progress::ProgressReporter;

pub async fn run(config: Config, inputs: JobInputs, quiet: bool) -> Result<()> {
    debug!("Creating search job");
    let client = super::build_client(&config)?;
    let mut progress = ProgressReporter::stderr(quiet);
    let handle = sumo_lifecycle::create_job(&client, &inputs, super::now_utc(), &mut progress).await?;

    println!("{}", handle.id);
    Ok(())
}
