//! Sumo Logic Search Job API client.
//!
//! This crate provides a type-safe async client for the Search Job REST API:
//! creating jobs, checking their status, paging through messages and records,
//! and deleting jobs. Authentication uses an access id / access key pair.

mod auth;
pub mod client;
pub mod error;
pub mod models;
mod serde_helpers;

pub mod endpoints;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::Credentials;
pub use client::SumoClient;
pub use client::builder::SumoClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    AutoParsingMode, JobHandle, JobSpecification, JobState, JobStatusSnapshot, ResultBatch,
    ResultKind,
};
