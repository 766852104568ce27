//! Data models for Search Job API requests and responses.

mod errors;
mod jobs;
mod results;
mod status;

pub(crate) use errors::ApiErrorBody;
pub use jobs::{AutoParsingMode, JobHandle, JobSpecification, UnknownAutoParsingMode};
pub use results::{ResultBatch, ResultKind};
pub use status::{JobState, JobStatusSnapshot};
