//! `job-results`: page through a job's messages and records.

use anyhow::Result;
use sumo_config::Config;
use sumo_lifecycle::{JsonPageWriter, PageOptions};
use tracing::debug;

use crate::progress::ProgressReporter;

pub async fn run(config: Config, job_id: &str, opts: PageOptions, quiet: bool) -> Result<()> {
    let client = super::build_client(&config)?;
    let mut progress = ProgressReporter::stderr(quiet);
    let mut sink = JsonPageWriter::new(std::io::stdout().lock());

    let summary =
        sumo_lifecycle::fetch_results(&client, job_id, &opts, &mut progress, &mut sink).await?;
    debug!(
        message_pages = summary.message_pages,
        record_pages = summary.record_pages,
        "Results fetched"
    );
    Ok(())
}
