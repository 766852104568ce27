//! Centralized constants for the search job CLI workspace.
//!
//! Default values used across crates, kept in one place to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Config file name looked up in the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".sumo-search-job-cli.yaml";

// =============================================================================
// Job Definition Defaults
// =============================================================================

/// Timezone applied to a job when none is supplied.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Timestamp layout for the `from` / `to` job fields.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// =============================================================================
// Polling & Pagination Defaults
// =============================================================================

/// Default sleep between status polls and between page fetches, in seconds.
pub const DEFAULT_SLEEP_SECS: u64 = 1;

/// Default page size for `job-results`.
pub const DEFAULT_RESULTS_LIMIT: u32 = 50;

/// Default page size for `job-process-full`.
pub const DEFAULT_PROCESS_FULL_LIMIT: u32 = 100;

// =============================================================================
// Keep-Alive Defaults
// =============================================================================

/// Default interval between keep-alive status requests, in seconds.
pub const DEFAULT_KEEP_ALIVE_INTERVAL_SECS: u64 = 30;

/// Default keep-alive duration, in minutes.
pub const DEFAULT_KEEP_ALIVE_DURATION_MINUTES: u64 = 30;

/// Default number of keep-alive requests.
pub const DEFAULT_KEEP_ALIVE_COUNT: u32 = 10;
