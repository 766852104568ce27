//! Access id / access key credentials.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Credentials for HTTP Basic authentication against the Search Job API.
#[derive(Debug, Clone)]
pub struct Credentials {
    access_id: String,
    access_key: SecretString,
}

impl Credentials {
    /// Create a new credential pair.
    pub fn new(access_id: impl Into<String>, access_key: SecretString) -> Self {
        Self {
            access_id: access_id.into(),
            access_key,
        }
    }

    /// The access id (safe to log).
    pub fn access_id(&self) -> &str {
        &self.access_id
    }

    /// Attach the Basic auth header to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.access_id, Some(self.access_key.expose_secret()))
    }
}
