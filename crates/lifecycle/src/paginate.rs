//! Result pagination loop.
//!
//! Messages are fetched first, then records. Each kind keeps its own cursor
//! starting at the requested offset and advancing by `limit`. Without
//! `all` only the first page of each kind is fetched; with `all`, paging
//! stops once the advanced offset exceeds the kind's total count.

use sumo_client::{JobStatusSnapshot, ResultKind};
use tracing::{debug, info};

use crate::api::SearchJobApi;
use crate::error::{Result, ValidationError};
use crate::options::PageOptions;
use crate::sink::BatchSink;

/// What the pagination loop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationSummary {
    pub message_pages: u32,
    pub record_pages: u32,
    /// The job reported zero messages and zero records; nothing was fetched.
    pub no_results: bool,
}

impl PaginationSummary {
    pub fn total_pages(&self) -> u32 {
        self.message_pages + self.record_pages
    }
}

/// Fetch result pages for `job_id` according to `status` and `opts`,
/// emitting each page to `sink` as soon as it arrives.
pub async fn paginate<A, S>(
    api: &A,
    job_id: &str,
    status: &JobStatusSnapshot,
    opts: &PageOptions,
    sink: &mut S,
) -> Result<PaginationSummary>
where
    A: SearchJobApi + ?Sized,
    S: BatchSink + ?Sized,
{
    if opts.limit == 0 {
        return Err(ValidationError::InvalidLimit.into());
    }

    if status.is_empty() {
        info!(job_id, "Search job returned no results");
        return Ok(PaginationSummary {
            no_results: true,
            ..PaginationSummary::default()
        });
    }

    let mut summary = PaginationSummary::default();
    for (kind, count) in [
        (ResultKind::Messages, status.message_count),
        (ResultKind::Records, status.record_count),
    ] {
        if !opts.filter.includes(kind) || count == 0 {
            debug!(job_id, %kind, count, "Skipping result kind");
            continue;
        }
        let pages = fetch_kind(api, job_id, kind, count, opts, sink).await?;
        match kind {
            ResultKind::Messages => summary.message_pages = pages,
            ResultKind::Records => summary.record_pages = pages,
        }
    }
    Ok(summary)
}

async fn fetch_kind<A, S>(
    api: &A,
    job_id: &str,
    kind: ResultKind,
    count: u64,
    opts: &PageOptions,
    sink: &mut S,
) -> Result<u32>
where
    A: SearchJobApi + ?Sized,
    S: BatchSink + ?Sized,
{
    let mut offset = opts.offset;
    let mut pages = 0;
    loop {
        let batch = match kind {
            ResultKind::Messages => api.get_messages(job_id, opts.limit, offset).await?,
            ResultKind::Records => api.get_records(job_id, opts.limit, offset).await?,
        };
        sink.emit(&batch)?;
        pages += 1;

        // An offset that would overflow is past any count.
        match offset.checked_add(u64::from(opts.limit)) {
            Some(next) if opts.all && next <= count => offset = next,
            _ => {
                debug!(job_id, %kind, pages, count, "Pagination finished");
                return Ok(pages);
            }
        }
        tokio::time::sleep(opts.sleep).await;
    }
}
