//! `job-process-full`: create a job, wait for it, print every page, delete it.

use anyhow::Result;
use sumo_config::Config;
use sumo_lifecycle::{JobInputs, JsonPageWriter, RunOptions};
use tracing::info;

use crate::progress::ProgressReporter;

pub async fn run(config: Config, inputs: JobInputs, opts: RunOptions, quiet: bool) -> Result<()> {
    let client = super::build_client(&config)?;
    let mut progress = ProgressReporter::stderr(quiet);
    let mut sink = JsonPageWriter::new(std::io::stdout().lock());

    let outcome =
        sumo_lifecycle::run_full(&client, &inputs, super::now_utc(), &opts, &mut progress, &mut sink).await?;
    info!(
        job_id = %outcome.handle.id,
        state = %outcome.status.state,
        pages = outcome.summary.total_pages(),
        "Search job processed"
    );
    Ok(())
}
