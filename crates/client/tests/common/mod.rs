//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use sumo_client::testing::load_fixture;

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use sumo_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;
use sumo_client::Credentials;

/// Credentials that match [`basic_auth_header`].
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new("suTEST", SecretString::new("test-key".to_string().into()))
}

/// `Authorization` header value for [`test_credentials`] (`suTEST:test-key`).
#[allow(dead_code)]
pub fn basic_auth_header() -> &'static str {
    "Basic c3VURVNUOnRlc3Qta2V5"
}
