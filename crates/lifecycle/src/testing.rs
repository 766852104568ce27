//! In-memory [`SearchJobApi`] for tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! [`ScriptedApi`] replays a scripted sequence of status snapshots (the last
//! one repeats once the script is exhausted), fabricates result pages, and
//! records every call so tests can assert exact call sequences.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use sumo_client::{
    ClientError, JobHandle, JobSpecification, JobState, JobStatusSnapshot, ResultBatch, ResultKind,
};

use crate::api::SearchJobApi;
use crate::observer::LifecycleObserver;

/// One recorded API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Create(JobSpecification),
    Delete(String),
    Status(String),
    Messages {
        job_id: String,
        limit: u32,
        offset: u64,
    },
    Records {
        job_id: String,
        limit: u32,
        offset: u64,
    },
}

impl ApiCall {
    pub fn kind(&self) -> CallKind {
        match self {
            ApiCall::Create(_) => CallKind::Create,
            ApiCall::Delete(_) => CallKind::Delete,
            ApiCall::Status(_) => CallKind::Status,
            ApiCall::Messages { .. } => CallKind::Messages,
            ApiCall::Records { .. } => CallKind::Records,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Create,
    Delete,
    Status,
    Messages,
    Records,
}

#[derive(Debug, Default)]
struct Script {
    job_id: String,
    statuses: VecDeque<JobStatusSnapshot>,
    failures: Vec<(CallKind, u16)>,
    calls: Vec<ApiCall>,
}

/// Scripted fake of the Search Job API.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    script: Mutex<Script>,
}

/// A snapshot with the given state and counts.
pub fn snapshot(state: JobState, message_count: u64, record_count: u64) -> JobStatusSnapshot {
    JobStatusSnapshot::new(state, message_count, record_count)
}

impl ScriptedApi {
    /// A fake whose created jobs get `job_id`.
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            script: Mutex::new(Script {
                job_id: job_id.into(),
                ..Script::default()
            }),
        }
    }

    /// Status snapshots to return, in order. The last one repeats.
    pub fn with_statuses(self, statuses: impl IntoIterator<Item = JobStatusSnapshot>) -> Self {
        self.lock().statuses.extend(statuses);
        self
    }

    /// Make every call of `kind` fail with an API error of `status`.
    pub fn failing(self, kind: CallKind, status: u16) -> Self {
        self.lock().failures.push((kind, status));
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    pub fn count(&self, kind: CallKind) -> usize {
        self.lock().calls.iter().filter(|c| c.kind() == kind).count()
    }

    /// Offsets requested for one result kind, in order.
    pub fn page_offsets(&self, kind: ResultKind) -> Vec<u64> {
        self.lock()
            .calls
            .iter()
            .filter_map(|c| match (c, kind) {
                (ApiCall::Messages { offset, .. }, ResultKind::Messages)
                | (ApiCall::Records { offset, .. }, ResultKind::Records) => Some(*offset),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: ApiCall) -> Result<(), ClientError> {
        let mut script = self.lock();
        let kind = call.kind();
        script.calls.push(call);
        match script.failures.iter().find(|(k, _)| *k == kind) {
            Some((_, status)) => Err(ClientError::ApiError {
                status: *status,
                url: format!("scripted://{kind:?}"),
                message: "scripted failure".to_string(),
                request_id: None,
            }),
            None => Ok(()),
        }
    }

    fn page(kind: ResultKind, limit: u32, offset: u64) -> ResultBatch {
        ResultBatch {
            kind,
            offset,
            limit,
            body: serde_json::json!({
                "fields": [{"name": "offset", "fieldType": "long", "keyField": false}],
                (kind.path_segment()): [{"map": {"offset": offset.to_string()}}],
            }),
        }
    }
}

#[async_trait]
impl SearchJobApi for ScriptedApi {
    async fn create_job(&self, spec: &JobSpecification) -> Result<JobHandle, ClientError> {
        self.record(ApiCall::Create(spec.clone()))?;
        let id = self.lock().job_id.clone();
        Ok(JobHandle {
            location: format!("https://api.sumologic.com/api/v1/search/jobs/{id}"),
            id,
        })
    }

    async fn delete_job(&self, job_id: &str) -> Result<(), ClientError> {
        self.record(ApiCall::Delete(job_id.to_string()))
    }

    async fn get_status(&self, job_id: &str) -> Result<JobStatusSnapshot, ClientError> {
        self.record(ApiCall::Status(job_id.to_string()))?;
        let mut script = self.lock();
        let next = if script.statuses.len() > 1 {
            script.statuses.pop_front()
        } else {
            script.statuses.front().cloned()
        };
        next.ok_or_else(|| ClientError::InvalidResponse("no scripted status".to_string()))
    }

    async fn get_messages(
        &self,
        job_id: &str,
        limit: u32,
        offset: u64,
    ) -> Result<ResultBatch, ClientError> {
        self.record(ApiCall::Messages {
            job_id: job_id.to_string(),
            limit,
            offset,
        })?;
        Ok(Self::page(ResultKind::Messages, limit, offset))
    }

    async fn get_records(
        &self,
        job_id: &str,
        limit: u32,
        offset: u64,
    ) -> Result<ResultBatch, ClientError> {
        self.record(ApiCall::Records {
            job_id: job_id.to_string(),
            limit,
            offset,
        })?;
        Ok(Self::page(ResultKind::Records, limit, offset))
    }
}

/// Observer events, in the order they were reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observed {
    Created(String),
    Status(JobState),
    NoResults(String),
    Deleted(String),
}

/// Observer that records every callback.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<Observed>,
}

impl RecordingObserver {
    pub fn statuses(&self) -> Vec<JobState> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Observed::Status(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }
}

impl LifecycleObserver for RecordingObserver {
    fn job_created(&mut self, handle: &JobHandle) {
        self.events.push(Observed::Created(handle.id.clone()));
    }

    fn status(&mut self, snapshot: &JobStatusSnapshot) {
        self.events.push(Observed::Status(snapshot.state.clone()));
    }

    fn no_results(&mut self, job_id: &str) {
        self.events.push(Observed::NoResults(job_id.to_string()));
    }

    fn job_deleted(&mut self, job_id: &str) {
        self.events.push(Observed::Deleted(job_id.to_string()));
    }
}
