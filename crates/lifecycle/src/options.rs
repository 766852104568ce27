//! Per-invocation run options.
//!
//! Built once from the command line and passed by reference; never mutated.

use std::time::Duration;

use sumo_config::constants::{
    DEFAULT_KEEP_ALIVE_COUNT, DEFAULT_KEEP_ALIVE_DURATION_MINUTES,
    DEFAULT_KEEP_ALIVE_INTERVAL_SECS, DEFAULT_PROCESS_FULL_LIMIT, DEFAULT_RESULTS_LIMIT,
    DEFAULT_SLEEP_SECS,
};
use sumo_client::ResultKind;

/// Which result kinds to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultFilter {
    #[default]
    Both,
    MessagesOnly,
    RecordsOnly,
}

impl ResultFilter {
    /// Build from the `--messages` / `--records` flags.
    pub fn from_flags(messages_only: bool, records_only: bool) -> Self {
        match (messages_only, records_only) {
            (true, false) => ResultFilter::MessagesOnly,
            (false, true) => ResultFilter::RecordsOnly,
            _ => ResultFilter::Both,
        }
    }

    pub fn includes(&self, kind: ResultKind) -> bool {
        match (self, kind) {
            (ResultFilter::Both, _) => true,
            (ResultFilter::MessagesOnly, ResultKind::Messages) => true,
            (ResultFilter::RecordsOnly, ResultKind::Records) => true,
            _ => false,
        }
    }
}

/// Status polling behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOptions {
    /// Keep polling until a terminal state; otherwise fetch status once.
    pub poll: bool,
    /// Fixed delay between polls.
    pub sleep: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            poll: false,
            sleep: Duration::from_secs(DEFAULT_SLEEP_SECS),
        }
    }
}

/// Result pagination behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub limit: u32,
    /// Starting offset, shared by both kinds.
    pub offset: u64,
    /// Fetch every page rather than only the first.
    pub all: bool,
    pub filter: ResultFilter,
    /// Fixed delay between pages of the same kind.
    pub sleep: Duration,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RESULTS_LIMIT,
            offset: 0,
            all: false,
            filter: ResultFilter::Both,
            sleep: Duration::from_secs(DEFAULT_SLEEP_SECS),
        }
    }
}

/// Options for the end-to-end workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub poll: PollOptions,
    pub pages: PageOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            poll: PollOptions {
                poll: true,
                ..PollOptions::default()
            },
            pages: PageOptions {
                limit: DEFAULT_PROCESS_FULL_LIMIT,
                all: true,
                ..PageOptions::default()
            },
        }
    }
}

/// Keep-alive loop bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepAliveOptions {
    pub interval: Duration,
    /// Stop once this much time has passed (unless `forever`).
    pub duration: Duration,
    /// Stop after this many status requests (unless `forever`).
    pub count: u32,
    pub forever: bool,
}

impl Default for KeepAliveOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_KEEP_ALIVE_INTERVAL_SECS),
            duration: Duration::from_secs(DEFAULT_KEEP_ALIVE_DURATION_MINUTES * 60),
            count: DEFAULT_KEEP_ALIVE_COUNT,
            forever: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_flags() {
        assert_eq!(ResultFilter::from_flags(false, false), ResultFilter::Both);
        assert_eq!(ResultFilter::from_flags(true, false), ResultFilter::MessagesOnly);
        assert_eq!(ResultFilter::from_flags(false, true), ResultFilter::RecordsOnly);
        assert!(!ResultFilter::RecordsOnly.includes(ResultKind::Messages));
        assert!(ResultFilter::Both.includes(ResultKind::Records));
    }

    #[test]
    fn test_full_run_defaults() {
        let opts = RunOptions::default();
        assert!(opts.poll.poll);
        assert!(opts.pages.all);
        assert_eq!(opts.pages.limit, 100);
        assert_eq!(PageOptions::default().limit, 50);
    }
}
