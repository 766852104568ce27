//! Shared test utilities for sumo-search-job-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv and config
//!   file loading.
//! - Provide canned Search Job API responses for wiremock.
//!
//! Invariants / Assumptions:
//! - `SUMO_ACCESS_ID` / `SUMO_ACCESS_KEY` are set to dummy values unless overridden.
//! - `HOME` points at a directory without a config file.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{Value, json};
use wiremock::ResponseTemplate;

pub const JOB_ID: &str = "3A7E4B1C9D2F5E60";

/// Returns a hermetic `sumo-search-job-cli` command for integration testing.
pub fn sumo_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("sumo-search-job-cli");

    // Hermeticity: prevent loading local .env and ~/.sumo-search-job-cli.yaml
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("HOME", std::env::temp_dir().join("sumo-cli-test-home"));

    cmd.env("SUMO_ACCESS_ID", "suTEST");
    cmd.env("SUMO_ACCESS_KEY", "test-key");

    cmd.env_remove("SUMO_DEPLOYMENT")
        .env_remove("SUMO_HOST")
        .env_remove("SUMO_TIMEOUT")
        .env_remove("SUMO_CONFIG_PATH")
        .env_remove("RUST_LOG");

    cmd
}

/// `sumo_cmd()` pointed at a mock server.
pub fn sumo_cmd_with_host(host: &str) -> Command {
    let mut cmd = sumo_cmd();
    cmd.env("SUMO_HOST", host);
    cmd
}

pub fn jobs_path() -> String {
    format!("/v1/search/jobs/{JOB_ID}")
}

/// 202 with a `Location` header pointing at [`JOB_ID`].
pub fn created(server_uri: &str) -> ResponseTemplate {
    ResponseTemplate::new(202)
        .insert_header("Location", format!("{server_uri}/v1/search/jobs/{JOB_ID}").as_str())
        .set_body_json(json!({
            "id": JOB_ID,
            "link": { "rel": "self", "href": format!("{server_uri}/v1/search/jobs/{JOB_ID}") }
        }))
}

pub fn status_body(state: &str, messages: u64, records: u64) -> Value {
    json!({
        "state": state,
        "messageCount": messages,
        "recordCount": records,
        "histogramBuckets": [],
        "pendingWarnings": [],
        "pendingErrors": []
    })
}

pub fn messages_body(raw: &[&str]) -> Value {
    let messages: Vec<Value> = raw
        .iter()
        .map(|r| json!({ "map": { "_raw": r, "_sourcehost": "web-01" } }))
        .collect();
    json!({
        "fields": [{ "name": "_raw", "fieldType": "string", "keyField": false }],
        "messages": messages
    })
}

pub fn records_body(counts: &[u64]) -> Value {
    let records: Vec<Value> = counts
        .iter()
        .map(|c| json!({ "map": { "_count": c.to_string() } }))
        .collect();
    json!({
        "fields": [{ "name": "_count", "fieldType": "int", "keyField": false }],
        "records": records
    })
}

pub fn error_body(status: u16, code: &str, message: &str) -> Value {
    json!({
        "status": status,
        "id": "IUUQI-DGH5I-TJ045",
        "code": code,
        "message": message
    })
}
