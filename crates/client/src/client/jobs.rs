//! Search job API methods for [`SumoClient`].

use crate::client::SumoClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{JobHandle, JobSpecification, JobStatusSnapshot, ResultBatch, ResultKind};

impl SumoClient {
    /// Create a search job.
    pub async fn create_job(&self, spec: &JobSpecification) -> Result<JobHandle> {
        endpoints::create_job(&self.http, &self.base_url, &self.credentials, spec).await
    }

    /// Get the current status of a search job.
    pub async fn get_job_status(&self, job_id: &str) -> Result<JobStatusSnapshot> {
        endpoints::get_job_status(&self.http, &self.base_url, &self.credentials, job_id).await
    }

    /// Get one page of results of the given kind.
    pub async fn get_job_results(
        &self,
        job_id: &str,
        kind: ResultKind,
        offset: u64,
        limit: u32,
    ) -> Result<ResultBatch> {
        endpoints::get_job_results(
            &self.http,
            &self.base_url,
            &self.credentials,
            job_id,
            kind,
            offset,
            limit,
        )
        .await
    }

    /// Get one page of messages.
    pub async fn get_job_messages(
        &self,
        job_id: &str,
        offset: u64,
        limit: u32,
    ) -> Result<ResultBatch> {
        self.get_job_results(job_id, ResultKind::Messages, offset, limit)
            .await
    }

    /// Get one page of records.
    pub async fn get_job_records(
        &self,
        job_id: &str,
        offset: u64,
        limit: u32,
    ) -> Result<ResultBatch> {
        self.get_job_results(job_id, ResultKind::Records, offset, limit)
            .await
    }

    /// Delete a search job.
    pub async fn delete_job(&self, job_id: &str) -> Result<()> {
        endpoints::delete_job(&self.http, &self.base_url, &self.credentials, job_id).await
    }
}
