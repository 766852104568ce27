//! Keep-alive loop.
//!
//! Issues periodic status requests so the service does not expire an idle
//! job. Terminal states do not end the loop; only the request count, the
//! elapsed time, or nothing at all (`forever`) bound it.

use sumo_client::ClientError;
use tokio::time::Instant;
use tracing::debug;

use crate::api::SearchJobApi;
use crate::observer::LifecycleObserver;
use crate::options::KeepAliveOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepAliveSummary {
    pub requests: u32,
}

/// Fetch status, report it, and repeat every `interval` until a bound is hit.
///
/// The loop stops after a request when not `forever` and either `count`
/// requests have been made or more than `duration` has elapsed.
pub async fn keep_alive<A, O>(
    api: &A,
    job_id: &str,
    opts: &KeepAliveOptions,
    observer: &mut O,
) -> Result<KeepAliveSummary, ClientError>
where
    A: SearchJobApi + ?Sized,
    O: LifecycleObserver + ?Sized,
{
    let start = Instant::now();
    let mut requests: u32 = 0;
    loop {
        let snapshot = api.get_status(job_id).await?;
        requests = requests.saturating_add(1);
        observer.status(&snapshot);

        if !opts.forever && (requests >= opts.count || start.elapsed() > opts.duration) {
            debug!(job_id, requests, "Keep-alive finished");
            return Ok(KeepAliveSummary { requests });
        }

        debug!(job_id, requests, state = %snapshot.state, "Keep-alive request sent");
        tokio::time::sleep(opts.interval).await;
    }
}
