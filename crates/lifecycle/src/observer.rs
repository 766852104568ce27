//! Progress callbacks.
//!
//! The engine never prints. Anything a user should see while a job runs is
//! reported through [`LifecycleObserver`]; every method defaults to a no-op.

use sumo_client::{JobHandle, JobStatusSnapshot};

pub trait LifecycleObserver {
    fn job_created(&mut self, _handle: &JobHandle) {}

    /// Called once per status fetch, in fetch order.
    fn status(&mut self, _snapshot: &JobStatusSnapshot) {}

    /// The job finished with neither messages nor records.
    fn no_results(&mut self, _job_id: &str) {}

    fn job_deleted(&mut self, _job_id: &str) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl LifecycleObserver for NoopObserver {}
