//! REST API endpoint implementations.
//!
//! Each function issues exactly one HTTP request. Callers own any
//! sequencing (polling, paging) on top of these.

mod request;
mod search_jobs;
pub mod url_encoding;

pub(crate) use request::send_request;
pub use search_jobs::{create_job, delete_job, get_job_results, get_job_status};
pub use url_encoding::encode_path_segment;

/// Path of the search job collection, relative to the API base URL.
pub const SEARCH_JOBS_PATH: &str = "/v1/search/jobs";
