//! Search job endpoints.
//!
//! - `POST   /v1/search/jobs`
//! - `GET    /v1/search/jobs/{id}`
//! - `GET    /v1/search/jobs/{id}/messages?offset=&limit=`
//! - `GET    /v1/search/jobs/{id}/records?offset=&limit=`
//! - `DELETE /v1/search/jobs/{id}`

use reqwest::Client;
use reqwest::header::LOCATION;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::{SEARCH_JOBS_PATH, encode_path_segment, send_request};
use crate::error::{ClientError, Result};
use crate::models::{JobHandle, JobSpecification, JobStatusSnapshot, ResultBatch, ResultKind};

fn job_url(base_url: &str, job_id: &str) -> String {
    format!(
        "{}{}/{}",
        base_url,
        SEARCH_JOBS_PATH,
        encode_path_segment(job_id)
    )
}

/// Create a search job. The job id is taken from the `Location` header.
pub async fn create_job(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    spec: &JobSpecification,
) -> Result<JobHandle> {
    let url = format!("{}{}", base_url, SEARCH_JOBS_PATH);
    debug!(
        query_len = spec.query.len(),
        from = %spec.from,
        to = %spec.to,
        timezone = %spec.timezone,
        "Creating search job"
    );

    let builder = credentials.apply(client.post(&url)).json(spec);
    let response = send_request(builder, "/v1/search/jobs", "POST").await?;

    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ClientError::MissingLocation)?;

    let handle = JobHandle::from_location(location).ok_or_else(|| {
        ClientError::InvalidResponse(format!("Location header has no job id: {location}"))
    })?;
    debug!(job_id = %handle.id, "Search job created");
    Ok(handle)
}

/// Fetch the current status of a job.
pub async fn get_job_status(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    job_id: &str,
) -> Result<JobStatusSnapshot> {
    let url = job_url(base_url, job_id);
    let builder = credentials.apply(client.get(&url));
    let response = send_request(builder, "/v1/search/jobs/{id}", "GET").await?;

    let body: serde_json::Value = response.json().await?;
    serde_json::from_value(body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse job status: {}", e)))
}

/// Fetch one page of messages or records.
pub async fn get_job_results(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    job_id: &str,
    kind: ResultKind,
    offset: u64,
    limit: u32,
) -> Result<ResultBatch> {
    let url = format!("{}/{}", job_url(base_url, job_id), kind.path_segment());
    debug!(job_id, %kind, offset, limit, "Fetching result page");

    let builder = credentials
        .apply(client.get(&url))
        .query(&[("offset", offset.to_string()), ("limit", limit.to_string())]);
    let endpoint = match kind {
        ResultKind::Messages => "/v1/search/jobs/{id}/messages",
        ResultKind::Records => "/v1/search/jobs/{id}/records",
    };
    let response = send_request(builder, endpoint, "GET").await?;

    let body: serde_json::Value = response.json().await?;
    if !body.is_object() {
        return Err(ClientError::InvalidResponse(format!(
            "Expected a JSON object for {kind}, got: {body}"
        )));
    }

    Ok(ResultBatch {
        kind,
        offset,
        limit,
        body,
    })
}

/// Delete a job.
pub async fn delete_job(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    job_id: &str,
) -> Result<()> {
    let url = job_url(base_url, job_id);
    let builder = credentials.apply(client.delete(&url));
    send_request(builder, "/v1/search/jobs/{id}", "DELETE").await?;
    debug!(job_id, "Search job deleted");
    Ok(())
}
