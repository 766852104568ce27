//! The remote operations the engine needs.
//!
//! [`SearchJobApi`] is the only way the engine talks to the service, so the
//! loops can be driven by [`sumo_client::SumoClient`] in production and by an
//! in-memory fake in tests.

use async_trait::async_trait;
use sumo_client::{
    ClientError, JobHandle, JobSpecification, JobStatusSnapshot, ResultBatch, SumoClient,
};

type ApiResult<T> = std::result::Result<T, ClientError>;

/// Search job operations. Every error is fatal to the caller; none is retried.
#[async_trait]
pub trait SearchJobApi: Send + Sync {
    async fn create_job(&self, spec: &JobSpecification) -> ApiResult<JobHandle>;

    async fn delete_job(&self, job_id: &str) -> ApiResult<()>;

    async fn get_status(&self, job_id: &str) -> ApiResult<JobStatusSnapshot>;

    async fn get_messages(&self, job_id: &str, limit: u32, offset: u64) -> ApiResult<ResultBatch>;

    async fn get_records(&self, job_id: &str, limit: u32, offset: u64) -> ApiResult<ResultBatch>;
}

#[async_trait]
impl SearchJobApi for SumoClient {
    async fn create_job(&self, spec: &JobSpecification) -> ApiResult<JobHandle> {
        SumoClient::create_job(self, spec).await
    }

    async fn delete_job(&self, job_id: &str) -> ApiResult<()> {
        SumoClient::delete_job(self, job_id).await
    }

    async fn get_status(&self, job_id: &str) -> ApiResult<JobStatusSnapshot> {
        self.get_job_status(job_id).await
    }

    async fn get_messages(&self, job_id: &str, limit: u32, offset: u64) -> ApiResult<ResultBatch> {
        self.get_job_messages(job_id, offset, limit).await
    }

    async fn get_records(&self, job_id: &str, limit: u32, offset: u64) -> ApiResult<ResultBatch> {
        self.get_job_records(job_id, offset, limit).await
    }
}
