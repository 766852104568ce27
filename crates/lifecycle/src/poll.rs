//! Status poll loop.
//!
//! # Invariants
//! - With `poll == false` exactly one status request is made.
//! - A terminal state stops the loop even when polling.
//! - Unrecognized states are treated as still running and logged every time.

use sumo_client::{ClientError, JobState, JobStatusSnapshot};
use tracing::{debug, warn};

use crate::api::SearchJobApi;
use crate::observer::LifecycleObserver;
use crate::options::PollOptions;

/// Fetch status until the job is terminal (or once, when not polling).
///
/// Every snapshot is passed to `observer` before the stop decision. Returns
/// the last snapshot fetched.
pub async fn poll_status<A, O>(
    api: &A,
    job_id: &str,
    opts: &PollOptions,
    observer: &mut O,
) -> Result<JobStatusSnapshot, ClientError>
where
    A: SearchJobApi + ?Sized,
    O: LifecycleObserver + ?Sized,
{
    let mut polls: u64 = 0;
    loop {
        let snapshot = api.get_status(job_id).await?;
        polls += 1;
        observer.status(&snapshot);

        if let JobState::Unrecognized(state) = &snapshot.state {
            warn!(job_id, state = %state, "Unrecognized search job state; continuing to poll");
        }

        if !opts.poll || snapshot.state.is_terminal() {
            debug!(job_id, polls, state = %snapshot.state, "Status polling finished");
            return Ok(snapshot);
        }

        debug!(
            job_id,
            state = %snapshot.state,
            message_count = snapshot.message_count,
            record_count = snapshot.record_count,
            sleep_secs = opts.sleep.as_secs_f64(),
            "Search job still running"
        );
        tokio::time::sleep(opts.sleep).await;
    }
}
