//! Search job lifecycle engine.
//!
//! Turns user-supplied job inputs into one validated [`JobSpecification`],
//! then drives a job through creation, status polling, result pagination and
//! deletion against any [`SearchJobApi`] implementation.
//!
//! The engine is strictly sequential: one job, one request in flight, fixed
//! sleeps between polls and pages, and no retries. Any transport error aborts
//! the current workflow.

pub mod api;
mod duration;
pub mod error;
pub mod inputs;
pub mod keep_alive;
pub mod observer;
pub mod options;
pub mod orchestrator;
pub mod paginate;
pub mod poll;
mod resolve;
pub mod sink;
mod validate;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use api::SearchJobApi;
pub use duration::parse_duration;
pub use error::{LifecycleError, Result, ValidationError};
pub use inputs::{InputOption, JobInputs};
pub use keep_alive::{KeepAliveSummary, keep_alive};
pub use observer::{LifecycleObserver, NoopObserver};
pub use options::{KeepAliveOptions, PageOptions, PollOptions, ResultFilter, RunOptions};
pub use orchestrator::{
    FullRunOutcome, create_job, delete_job, fetch_results, prepare_job, run_full,
};
pub use paginate::{PaginationSummary, paginate};
pub use poll::poll_status;
pub use resolve::resolve;
pub use sink::{BatchSink, JsonPageWriter};
pub use validate::{EXCLUSIONS, check_exclusions, check_time_range};

pub use sumo_client::{
    JobHandle, JobSpecification, JobState, JobStatusSnapshot, ResultBatch, ResultKind,
};
