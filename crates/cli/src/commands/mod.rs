//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function. Commands build
//! a [`SumoClient`] from the loaded config and hand the work to the lifecycle
//! engine; stdout carries results only.

pub mod job_create;
pub mod job_delete;
pub mod job_keep_alive;
pub mod job_process_full;
pub mod job_results;
pub mod job_status;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use sumo_client::SumoClient;
use sumo_config::Config;

pub(crate) fn build_client(config: &Config) -> Result<SumoClient> {
    SumoClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build API client")
}

/// Wall-clock "now" used to resolve spans and default endpoints.
pub(crate) fn now_utc() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
