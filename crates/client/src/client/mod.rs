//! Main Search Job API client.
//!
//! This module provides [`SumoClient`], a thin stateful wrapper around the
//! endpoint functions in [`crate::endpoints`]. It owns the HTTP connection
//! pool, the normalized API base URL and the credentials.
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Polling, pagination or any job lifecycle policy (callers drive those)
//!
//! # Invariants
//! - `base_url` never ends with a slash.
//! - No request is retried; the first failure is returned to the caller.

pub mod builder;
mod jobs;

use crate::auth::Credentials;

/// Search Job API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use sumo_client::{Credentials, SumoClient};
/// use secrecy::SecretString;
///
/// let client = SumoClient::builder()
///     .base_url("https://api.sumologic.com/api".to_string())
///     .credentials(Credentials::new("suABC", SecretString::new("key".to_string().into())))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct SumoClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
}

impl SumoClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SumoClientBuilder {
        builder::SumoClientBuilder::new()
    }

    /// The API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The access id used for authentication.
    pub fn access_id(&self) -> &str {
        self.credentials.access_id()
    }
}
