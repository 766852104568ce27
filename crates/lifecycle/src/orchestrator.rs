//! Workflow sequencing.
//!
//! The individual steps (create, status, results, delete) are exposed
//! separately so each can run on its own; [`run_full`] chains them.
//!
//! # Invariants
//! - No remote call is made until the inputs have fully validated.
//! - A created job is deleted only when every later step succeeded. On a
//!   downstream failure the job is left on the server and its id is logged.

use chrono::NaiveDateTime;
use sumo_client::{JobHandle, JobSpecification, JobStatusSnapshot};
use tracing::{info, warn};

use crate::api::SearchJobApi;
use crate::error::Result;
use crate::inputs::JobInputs;
use crate::observer::LifecycleObserver;
use crate::options::{PageOptions, PollOptions, RunOptions};
use crate::paginate::{PaginationSummary, paginate};
use crate::poll::poll_status;
use crate::resolve::resolve;
use crate::sink::BatchSink;
use crate::validate::{check_exclusions, check_time_range};

/// Result of an end-to-end run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullRunOutcome {
    pub handle: JobHandle,
    /// The snapshot pagination was driven by.
    pub status: JobStatusSnapshot,
    pub summary: PaginationSummary,
}

/// Validate option combinations, resolve inputs against `now`, and check the
/// resulting time window.
pub fn prepare_job(inputs: &JobInputs, now: NaiveDateTime) -> Result<JobSpecification> {
    check_exclusions(inputs)?;
    let spec = resolve(inputs, now)?;
    check_time_range(spec.from, spec.to)?;
    Ok(spec)
}

/// Validate inputs and create the job.
pub async fn create_job<A, O>(
    api: &A,
    inputs: &JobInputs,
    now: NaiveDateTime,
    observer: &mut O,
) -> Result<JobHandle>
where
    A: SearchJobApi + ?Sized,
    O: LifecycleObserver + ?Sized,
{
    let spec = prepare_job(inputs, now)?;
    let handle = api.create_job(&spec).await?;
    info!(job_id = %handle.id, location = %handle.location, "Search job created");
    observer.job_created(&handle);
    Ok(handle)
}

/// Fetch status once, then page through results.
pub async fn fetch_results<A, O, S>(
    api: &A,
    job_id: &str,
    opts: &PageOptions,
    observer: &mut O,
    sink: &mut S,
) -> Result<PaginationSummary>
where
    A: SearchJobApi + ?Sized,
    O: LifecycleObserver + ?Sized,
    S: BatchSink + ?Sized,
{
    let status = api.get_status(job_id).await?;
    let summary = paginate(api, job_id, &status, opts, sink).await?;
    if summary.no_results {
        observer.no_results(job_id);
    }
    Ok(summary)
}

/// Delete a job.
pub async fn delete_job<A, O>(api: &A, job_id: &str, observer: &mut O) -> Result<()>
where
    A: SearchJobApi + ?Sized,
    O: LifecycleObserver + ?Sized,
{
    api.delete_job(job_id).await?;
    info!(job_id, "Search job deleted");
    observer.job_deleted(job_id);
    Ok(())
}

/// Create, poll to completion, page through results, then delete.
pub async fn run_full<A, O, S>(
    api: &A,
    inputs: &JobInputs,
    now: NaiveDateTime,
    opts: &RunOptions,
    observer: &mut O,
    sink: &mut S,
) -> Result<FullRunOutcome>
where
    A: SearchJobApi + ?Sized,
    O: LifecycleObserver + ?Sized,
    S: BatchSink + ?Sized,
{
    let handle = create_job(api, inputs, now, observer).await?;

    let fetched = fetch_after_create(api, &handle, &opts.poll, &opts.pages, observer, sink).await;
    let (status, summary) = match fetched {
        Ok(done) => done,
        Err(e) => {
            warn!(
                job_id = %handle.id,
                error = %e,
                "Search job was not deleted after a failure; delete it manually"
            );
            return Err(e);
        }
    };

    delete_job(api, &handle.id, observer).await?;
    Ok(FullRunOutcome {
        handle,
        status,
        summary,
    })
}

async fn fetch_after_create<A, O, S>(
    api: &A,
    handle: &JobHandle,
    poll: &PollOptions,
    pages: &PageOptions,
    observer: &mut O,
    sink: &mut S,
) -> Result<(JobStatusSnapshot, PaginationSummary)>
where
    A: SearchJobApi + ?Sized,
    O: LifecycleObserver + ?Sized,
    S: BatchSink + ?Sized,
{
    let status = poll_status(api, &handle.id, poll, observer).await?;
    let summary = paginate(api, &handle.id, &status, pages, sink).await?;
    if summary.no_results {
        observer.no_results(&handle.id);
    }
    Ok((status, summary))
}
